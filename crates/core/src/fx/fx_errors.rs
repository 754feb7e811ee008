use thiserror::Error;

/// Errors internal to the rate provider.
#[derive(Error, Debug)]
pub enum FxError {
    /// The active table has no entry for the requested currency.
    #[error("Exchange rate not found: {0}")]
    RateNotFound(String),

    /// The shared rate table could not be read or written.
    #[error("Cache error: {0}")]
    Cache(String),

    /// An override document could not be used; the active table was left
    /// untouched.
    #[error("Override ignored: {0}")]
    OverrideIgnored(String),

    /// A remote refresh was requested but no source is configured.
    #[error("No remote rate source configured")]
    SourceNotConfigured,
}
