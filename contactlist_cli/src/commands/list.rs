use anyhow::{bail, Result};
use clap::Args;
use contactlist_lib::validation;
use contactlist_lib::{ContactList, ContactQuery, ListConfig, Query};

use crate::output::{print_contacts, render_controls, OutputFormat};

#[derive(Args, Clone, Debug)]
pub struct ListArgs {
    /// Match against name or email; passed to the service as typed
    #[arg(long, default_value = "")]
    pub search: String,

    /// Sort field: name, email
    #[arg(long, default_value = "name")]
    pub sort_by: String,

    /// Sort direction: asc, desc
    #[arg(long, default_value = "asc")]
    pub sort_dir: String,

    /// Zero-based page index
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Results per page (defaults to CONTACTS_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl ListArgs {
    pub fn to_query(&self, config: &ListConfig) -> Result<ContactQuery> {
        let page_size = validation::validate_page_size(self.page_size.unwrap_or(config.page_size))?;
        let sort_by = validation::validate_sort_by(&self.sort_by)?;
        let sort_dir = validation::validate_sort_dir(&self.sort_dir)?;

        Ok(ContactQuery::default()
            .with_search(&self.search)
            .with_sort_by(sort_by)
            .with_sort_direction(sort_dir)
            .with_page(self.page)
            .with_page_size(page_size))
    }
}

pub async fn run(args: &ListArgs, config: &ListConfig, format: &OutputFormat) -> Result<()> {
    let query = args.to_query(config)?;
    let mut list = ContactList::connect(config)?.starting_at(query);
    list.mount();
    list.settle().await;

    if let Some(message) = list.view().error() {
        bail!("{}", message);
    }

    print_contacts(list.view().contacts(), format)?;
    eprintln!("{}", render_controls(&list.controls()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use contactlist_lib::{ContactSortBy, SortDirection};

    use super::*;

    fn args() -> ListArgs {
        ListArgs {
            search: String::new(),
            sort_by: "name".to_string(),
            sort_dir: "asc".to_string(),
            page: 0,
            page_size: None,
        }
    }

    #[test]
    fn test_defaults_take_page_size_from_config() {
        let config = ListConfig {
            page_size: 25,
            ..ListConfig::default()
        };
        let query = args().to_query(&config).unwrap();
        assert_eq!(query.page(), 0);
        assert_eq!(query.page_size(), 25);
        assert_eq!(query.search, "");
        assert_eq!(query.sort_by, ContactSortBy::Name);
        assert_eq!(query.common.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_flags_are_applied() {
        let args = ListArgs {
            search: " Ada ".to_string(),
            sort_by: "EMAIL".to_string(),
            sort_dir: "desc".to_string(),
            page: 3,
            page_size: Some(5),
        };
        let query = args.to_query(&ListConfig::default()).unwrap();
        assert_eq!(query.search, " Ada ");
        assert_eq!(query.sort_by, ContactSortBy::Email);
        assert_eq!(query.common.sort_direction, SortDirection::Desc);
        assert_eq!(query.page(), 3);
        assert_eq!(query.page_size(), 5);
    }

    #[test]
    fn test_invalid_flags_are_rejected() {
        let mut bad_sort = args();
        bad_sort.sort_by = "phone".to_string();
        assert!(bad_sort.to_query(&ListConfig::default()).is_err());

        let mut bad_size = args();
        bad_size.page_size = Some(0);
        assert!(bad_size.to_query(&ListConfig::default()).is_err());
    }
}
