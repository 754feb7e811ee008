//! Rate source provider trait definition.

use async_trait::async_trait;

use crate::errors::RateFetchError;
use crate::models::RateSnapshot;

/// Trait for remote exchange-rate sources.
///
/// Implement this trait to add support for a new rate source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use pricekit_rates::{RateFetchError, RateSnapshot, RateSourceProvider};
///
/// struct MySource {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl RateSourceProvider for MySource {
///     fn id(&self) -> &'static str {
///         "MY_SOURCE"
///     }
///
///     async fn fetch_latest(&self, base: &str) -> Result<RateSnapshot, RateFetchError> {
///         // ... fetch and validate a full table
///     }
/// }
/// ```
#[async_trait]
pub trait RateSourceProvider: Send + Sync {
    /// Unique identifier for this source.
    ///
    /// Should be a constant string like "EXCHANGE_RATE_API". Used for
    /// logging and error tagging.
    fn id(&self) -> &'static str;

    /// Fetch the latest full rate table relative to `base`.
    ///
    /// # Returns
    ///
    /// A complete snapshot on success. Any schema deviation, missing
    /// entry, invalid rate, or transport failure is a [`RateFetchError`];
    /// a snapshot is never partially populated.
    async fn fetch_latest(&self, base: &str) -> Result<RateSnapshot, RateFetchError>;
}
