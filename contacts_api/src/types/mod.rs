mod page;
pub use self::page::{ContactPage, Page};

mod contact;
pub use self::contact::{Contact, ContactId};
