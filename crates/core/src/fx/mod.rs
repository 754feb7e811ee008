//! FX module - the active rate table, admin overrides, and best-effort
//! remote refresh.

mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_service_tests;

pub use fx_errors::FxError;
pub use fx_model::RateSet;
pub use fx_service::RateProvider;
