//! Line-driven interactive session over a live contact list.
//!
//! Each typed command changes the query; results are printed as the
//! background fetches complete, so several may be in flight at once.

use anyhow::{bail, Result};
use clap::Args;
use contactlist_lib::types::ContactId;
use contactlist_lib::validation;
use contactlist_lib::{
    ContactList, ContactService, ContactSortBy, ListConfig, ListEvent, RefreshKey, SortDirection,
    SyncOutcome,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::list::ListArgs;
use crate::output::{print_json, print_view};

const HELP: &str = "\
commands:
  search <text>     filter by name or email (text is sent as typed)
  clear             clear the search
  sort name|email   sort field
  dir asc|desc      sort direction
  page <n>          jump to page n (1-based, as labelled)
  next | prev       move one page
  delete <id>       delete a contact and reload the page
  edit <id>         print the displayed contact with that id
  refresh           reload the current page
  help              show this text
  quit              leave";

#[derive(Args)]
pub struct BrowseArgs {
    /// Initial query
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Search(String),
    SortBy(ContactSortBy),
    SortDir(SortDirection),
    /// Zero-based page index.
    Page(u32),
    Next,
    Prev,
    Delete(ContactId),
    Edit(ContactId),
    Refresh,
    Help,
    Quit,
}

fn parse_id(input: &str) -> Result<ContactId> {
    match input.trim().parse::<ContactId>() {
        Ok(id) => Ok(id),
        Err(_) => bail!("contact id must be an integer, got '{}'", input.trim()),
    }
}

fn parse_command(line: &str) -> Result<Option<BrowseCommand>> {
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Ok(None);
    }
    let (word, rest) = match trimmed.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((at, c)) => (&trimmed[..at], &trimmed[at + c.len_utf8()..]),
        None => (trimmed, ""),
    };

    let command = match word.to_lowercase().as_str() {
        // The rest of the line, spaces included, is the search text.
        "search" | "s" => BrowseCommand::Search(rest.to_string()),
        "clear" => BrowseCommand::Search(String::new()),
        "sort" => BrowseCommand::SortBy(validation::validate_sort_by(rest)?),
        "dir" => BrowseCommand::SortDir(validation::validate_sort_dir(rest)?),
        "page" | "p" => {
            let label = validation::parse_page(rest)?;
            if label == 0 {
                bail!("pages are numbered from 1");
            }
            BrowseCommand::Page(label - 1)
        }
        "next" | "n" => BrowseCommand::Next,
        "prev" => BrowseCommand::Prev,
        "delete" | "rm" => BrowseCommand::Delete(parse_id(rest)?),
        "edit" | "e" => BrowseCommand::Edit(parse_id(rest)?),
        "refresh" | "r" => BrowseCommand::Refresh,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => bail!("unknown command '{}', type 'help'", other),
    };
    Ok(Some(command))
}

/// Applies one command. Returns `false` when the session should end.
fn dispatch<S: ContactService>(
    list: &mut ContactList<S>,
    refresh: &mut RefreshKey,
    command: BrowseCommand,
) -> bool {
    match command {
        BrowseCommand::Search(text) => {
            list.set_search(&text);
        }
        BrowseCommand::SortBy(sort_by) => {
            list.set_sort_by(sort_by);
        }
        BrowseCommand::SortDir(sort_dir) => {
            list.set_sort_dir(sort_dir);
        }
        BrowseCommand::Page(page) => {
            let total_pages = list.view().total_pages();
            if page < total_pages {
                list.set_page(page);
            } else if total_pages == 0 {
                eprintln!("Page {} is out of range: no pages", page + 1);
            } else {
                eprintln!("Page {} is out of range (1-{})", page + 1, total_pages);
            }
        }
        BrowseCommand::Next => {
            if let Some(page) = list.controls().next {
                list.set_page(page);
            }
        }
        BrowseCommand::Prev => {
            if let Some(page) = list.controls().prev {
                list.set_page(page);
            }
        }
        BrowseCommand::Delete(id) => list.delete(id),
        BrowseCommand::Edit(id) => {
            if !list.edit(id) {
                eprintln!("No contact {} on this page", id);
            }
        }
        BrowseCommand::Refresh => {
            *refresh = refresh.next();
            list.observe_refresh(*refresh);
        }
        BrowseCommand::Help => println!("{}", HELP),
        BrowseCommand::Quit => return false,
    }
    true
}

pub async fn run(args: &BrowseArgs, config: &ListConfig) -> Result<()> {
    let query = args.list.to_query(config)?;
    let mut list = ContactList::connect(config)?
        .starting_at(query)
        .on_select(|contact| print_json(contact));
    let mut refresh = RefreshKey::default();

    list.mount();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprintln!("Type 'help' for commands.");

    loop {
        tokio::select! {
            Some(event) = list.next_completion(), if list.in_flight() > 0 => {
                match event {
                    ListEvent::Fetched { outcome: SyncOutcome::Discarded, .. } => {}
                    ListEvent::Deleted { id, .. } => eprintln!("Deleted contact {}", id),
                    _ => print_view(list.view(), &list.controls()),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(Some(command)) => {
                        if !dispatch(&mut list, &mut refresh, command) {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => eprintln!("{}", e),
                }
            }
        }
    }

    Ok(())
}
