use anyhow::Result;
use clap::Args;
use contactlist_lib::contacts_api::Client;
use contactlist_lib::ListConfig;

use crate::output::{print_contacts, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Contact ID
    pub id: i64,
}

pub async fn run(args: &ShowArgs, config: &ListConfig, format: &OutputFormat) -> Result<()> {
    let client = Client::with_base_url(&config.base_url)?;
    let contact = client.get_contact(args.id).await?;
    print_contacts(std::slice::from_ref(&contact), format)
}
