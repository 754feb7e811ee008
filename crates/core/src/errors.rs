//! Core error types for the PriceKit pricing engine.
//!
//! This module defines the root error type. Remote-fetch errors come from
//! the `pricekit-rates` crate and are converted here; they are non-fatal
//! by contract — a quote can always be produced from the last-known-good
//! table.

use thiserror::Error;

use crate::fx::FxError;
use pricekit_rates::RateFetchError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the pricing core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Rate fetch failed: {0}")]
    RateFetch(#[from] RateFetchError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
