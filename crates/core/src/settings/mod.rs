//! Settings module - the admin configuration document and its store.

mod settings_model;
mod settings_service;
mod settings_traits;

pub use settings_model::{AdminSettings, HolidayBannerSettings};
pub use settings_service::SettingsService;
pub use settings_traits::{MemorySettingsStore, SettingsStore};
