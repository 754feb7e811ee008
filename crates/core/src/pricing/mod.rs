//! Pricing module - price quoting over the active rate table, and the
//! static service catalog.

pub mod catalog;
mod pricing_model;
mod pricing_service;
mod pricing_service_tests;

pub use pricing_model::PriceQuote;
pub use pricing_service::PriceCalculator;
