//! Holiday module - promotional windows and the banner calendar.

mod holiday_model;
mod holiday_service;

pub use holiday_model::{thanksgiving_day, HolidayWindow};
pub use holiday_service::HolidayCalendar;
