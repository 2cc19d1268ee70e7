mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    ContactQuery, ContactSortBy, Query, QueryCommon, SortDirection, DEFAULT_PAGE_SIZE,
};
