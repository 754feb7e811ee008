//! Currency module - supported codes, static metadata, and display
//! formatting.

mod currency_model;
pub mod format;
pub mod region;

pub use currency_model::{CurrencyCode, CurrencyInfo, DigitGrouping, SymbolPosition};
pub use format::format_amount;
