use std::str::FromStr;

use url::Url;

use super::{common::QueryCommon, Query};

/// Query for the `/api/contacts` listing.
///
/// Every field is always serialized, including an empty `search`, which the
/// service reads as "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactQuery {
    pub common: QueryCommon,
    pub search: String,
    pub sort_by: ContactSortBy,
}

impl Query for ContactQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("search", &self.search)
            .append_pair("sortBy", &self.sort_by.to_string())
            .append_pair("sortDir", &self.common.sort_direction.to_string());
        url
    }
}

impl ContactQuery {
    /// Stores the search text verbatim. Does not touch the page index.
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_sort_by(mut self, sort_by: ContactSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn page(&self) -> u32 {
        self.common.page
    }

    pub fn page_size(&self) -> u32 {
        self.common.size
    }
}

/// Fields the service can sort contacts by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactSortBy {
    #[default]
    Name,
    Email,
}

impl std::fmt::Display for ContactSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ContactSortBy::Name => "name",
                ContactSortBy::Email => "email",
            }
        )?;
        Ok(())
    }
}

impl FromStr for ContactSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactSortBy::Name),
            "email" => Ok(ContactSortBy::Email),
            _ => Err(()),
        }
    }
}
