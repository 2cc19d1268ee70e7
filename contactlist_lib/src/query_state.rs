//! Query state: the five query inputs plus the externally owned refresh key.

use contacts_api::{ContactQuery, ContactSortBy, Query, SortDirection};

/// Opaque refresh signal owned by the caller. Only changes matter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RefreshKey(pub u64);

impl RefreshKey {
    /// A key that compares unequal to `self`.
    pub fn next(self) -> Self {
        RefreshKey(self.0.wrapping_add(1))
    }
}

/// Holds the current canonical query.
///
/// Every setter builds a replacement [`ContactQuery`] and returns `true`
/// when a fetch has to be issued for it.
#[derive(Clone, Debug)]
pub struct QueryState {
    query: ContactQuery,
    refresh: RefreshKey,
}

impl QueryState {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: ContactQuery::default().with_page_size(page_size),
            refresh: RefreshKey::default(),
        }
    }

    /// Starts from an explicit query, e.g. one assembled from command-line flags.
    pub fn from_query(query: ContactQuery) -> Self {
        Self {
            query,
            refresh: RefreshKey::default(),
        }
    }

    pub fn query(&self) -> &ContactQuery {
        &self.query
    }

    pub fn refresh_key(&self) -> RefreshKey {
        self.refresh
    }

    /// Stores the text verbatim and moves back to the first page.
    pub fn set_search(&mut self, text: &str) -> bool {
        let next = self.query.clone().with_search(text).with_page(0);
        self.replace(next)
    }

    /// Leaves the page index alone.
    pub fn set_sort_by(&mut self, sort_by: ContactSortBy) -> bool {
        let next = self.query.clone().with_sort_by(sort_by);
        self.replace(next)
    }

    /// Leaves the page index alone.
    pub fn set_sort_dir(&mut self, sort_dir: SortDirection) -> bool {
        let next = self.query.clone().with_sort_direction(sort_dir);
        self.replace(next)
    }

    /// No clamping: the pagination control only offers pages in range.
    pub fn set_page(&mut self, page: u32) -> bool {
        let next = self.query.clone().with_page(page);
        self.replace(next)
    }

    /// A changed key asks for the current query again; the query is untouched.
    pub fn observe_refresh(&mut self, key: RefreshKey) -> bool {
        if key == self.refresh {
            return false;
        }
        self.refresh = key;
        true
    }

    fn replace(&mut self, next: ContactQuery) -> bool {
        if next == self.query {
            return false;
        }
        self.query = next;
        true
    }
}
