//! Library layer for the contact list: view controller, configuration and validation.
//!
//! Wraps the `contacts_api` crate with the state kept by a list view: the
//! canonical query, the displayed page, and the rules tying them together.

pub mod config;
pub mod controller;
pub mod error;
pub mod query_state;
pub mod service;
pub mod sync;
pub mod validation;
pub mod view;

pub use contacts_api;
pub use contacts_api::types;
pub use contacts_api::{ContactQuery, ContactSortBy, Query, SortDirection};

pub use config::{ListConfig, ResponsePolicy};
pub use controller::{ContactList, ListEvent};
pub use error::ContactListError;
pub use query_state::{QueryState, RefreshKey};
pub use service::ContactService;
pub use sync::{FetchTicket, SyncOutcome, Synchronizer};
pub use view::{
    PageButton, PageControls, ViewState, DELETE_FAILED_MESSAGE, FETCH_FAILED_MESSAGE,
    MAX_PAGE_BUTTONS,
};
