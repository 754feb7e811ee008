//! PriceKit Rates Crate
//!
//! This crate provides source-agnostic exchange-rate fetching for the
//! PriceKit pricing core.
//!
//! # Overview
//!
//! The rates crate supports:
//! - A [`RateSourceProvider`] trait that remote rate sources implement
//! - A concrete provider for the free exchangerate-api.com endpoint
//! - Full-table snapshots only: a fetch either yields a complete,
//!   validated [`RateSnapshot`] or an error — never a partial table
//!
//! Fetching is strictly best-effort. The pricing core treats every error
//! from this crate as non-fatal and keeps quoting from its last-known-good
//! table, so nothing here is allowed to panic or block quoting.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::RateFetchError;
pub use models::RateSnapshot;
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::RateSourceProvider;
