mod common;
pub use self::common::{Query, QueryCommon, SortDirection, DEFAULT_PAGE_SIZE};

mod contact;
pub use self::contact::{ContactQuery, ContactSortBy};
