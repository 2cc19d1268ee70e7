//! Error types for the API client.

/// Errors that can occur when talking to the contact service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or bad URL).
    #[error("Request failed")]
    RequestFailed,
    /// The service returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
