//! Error types for the library layer.

use thiserror::Error;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding configuration and input validation failures.
///
/// The view controller never returns these for fetch or delete failures;
/// it records a user-facing message in the view instead.
#[derive(Error, Debug)]
pub enum ContactListError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] contacts_api::Error),
    /// A configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
