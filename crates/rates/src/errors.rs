//! Error types for remote rate fetching.

use thiserror::Error;

/// Errors that can occur while fetching a rate snapshot from a remote
/// source.
///
/// Every variant is non-fatal to price quoting: the caller keeps its
/// last-known-good table and may retry later at its own discretion.
#[derive(Error, Debug)]
pub enum RateFetchError {
    /// A network error occurred while communicating with the source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request to the source timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The source that timed out
        provider: String,
    },

    /// The source answered with a non-success HTTP status.
    #[error("Unexpected status from {provider}: HTTP {status}")]
    InvalidStatus {
        /// The source that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response body did not match the expected schema.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The source that returned the body
        provider: String,
        /// Description of the schema deviation
        message: String,
    },

    /// The response declared a base currency other than the requested one.
    #[error("Unexpected base currency from {provider}: {base}")]
    BaseMismatch {
        /// The source that returned the snapshot
        provider: String,
        /// The base currency the snapshot declared
        base: String,
    },

    /// The response was well-formed but lacked a required currency entry.
    #[error("Missing currency entry from {provider}: {code}")]
    MissingCurrency {
        /// The source that returned the snapshot
        provider: String,
        /// The currency code that was absent
        code: String,
    },

    /// The response carried a rate that is not a positive finite number.
    #[error("Invalid rate from {provider} for {code}")]
    InvalidRate {
        /// The source that returned the snapshot
        provider: String,
        /// The currency code with the bad rate
        code: String,
    },
}
