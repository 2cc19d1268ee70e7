mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use contactlist_lib::ListConfig;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "contactlist")]
#[command(about = "Browse and manage contacts held by a contact service")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base URL of the contact service (overrides CONTACTS_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of contacts
    List(commands::list::ListArgs),
    /// Show a single contact by ID
    Show(commands::show::ShowArgs),
    /// Delete a contact, then print the refreshed page
    Delete(commands::delete::DeleteArgs),
    /// Interactive session: type commands, see the list update
    Browse(commands::browse::BrowseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contactlist=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = ListConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &config, &format).await?,
        Commands::Show(args) => commands::show::run(args, &config, &format).await?,
        Commands::Delete(args) => commands::delete::run(args, &config, &format).await?,
        Commands::Browse(args) => commands::browse::run(args, &config).await?,
    }

    Ok(())
}
