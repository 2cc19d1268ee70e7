//! Parsers for user-supplied list parameters.
//!
//! Search text is deliberately absent: it is passed to the service verbatim.

use contacts_api::{ContactSortBy, SortDirection};

use crate::error::ContactListError;

pub const MAX_PAGE_SIZE: u32 = 100;

/// Validate a sort field: case-insensitive `name` or `email`.
pub fn validate_sort_by(input: &str) -> Result<ContactSortBy, ContactListError> {
    input
        .trim()
        .to_lowercase()
        .parse::<ContactSortBy>()
        .map_err(|_| {
            ContactListError::InvalidInput(format!(
                "unknown sort field '{}'. Valid values: name, email",
                input
            ))
        })
}

/// Validate a sort direction: `asc`/`desc`, long forms accepted.
pub fn validate_sort_dir(input: &str) -> Result<SortDirection, ContactListError> {
    match input.trim().to_lowercase().as_str() {
        "asc" | "ascending" => Ok(SortDirection::Asc),
        "desc" | "descending" => Ok(SortDirection::Desc),
        _ => Err(ContactListError::InvalidInput(format!(
            "unknown sort direction '{}'. Valid values: asc, desc",
            input
        ))),
    }
}

/// Validate page size (must be 1..=100).
pub fn validate_page_size(page_size: u32) -> Result<u32, ContactListError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(ContactListError::InvalidInput(format!(
            "page size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(page_size)
}

/// Parse a zero-based page number typed by a user.
pub fn parse_page(input: &str) -> Result<u32, ContactListError> {
    input.trim().parse::<u32>().map_err(|_| {
        ContactListError::InvalidInput(format!(
            "page must be a non-negative integer, got '{}'",
            input
        ))
    })
}
