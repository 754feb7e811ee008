//! Remote rate source providers.

pub mod exchange_rate_api;
mod traits;

pub use traits::RateSourceProvider;
