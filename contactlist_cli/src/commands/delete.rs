use anyhow::{bail, Result};
use clap::Args;
use contactlist_lib::{ContactList, ListConfig};

use super::list::ListArgs;
use crate::output::{print_contacts, OutputFormat};

#[derive(Args)]
pub struct DeleteArgs {
    /// Contact ID to delete
    pub id: i64,

    /// The page to show once the delete has gone through
    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn run(args: &DeleteArgs, config: &ListConfig, format: &OutputFormat) -> Result<()> {
    let query = args.list.to_query(config)?;
    let mut list = ContactList::connect(config)?.starting_at(query);
    list.mount();
    list.settle().await;

    list.delete(args.id);
    list.settle().await;

    if let Some(message) = list.view().error() {
        bail!("{}", message);
    }

    eprintln!("Deleted contact {}", args.id);
    print_contacts(list.view().contacts(), format)
}
