use chrono::{Datelike, NaiveDate};

use crate::holiday::holiday_model::HolidayWindow;
use crate::settings::HolidayBannerSettings;

/// Default banner copy shown when the admin has not customized it.
const DEFAULT_BANNER_TEXT: &str =
    "Holiday Special: 15% off all services during Thanksgiving, Christmas & New Year!";

/// Decides whether the holiday promotion is active for a given date,
/// honoring the admin banner overrides.
///
/// The calendar itself is pure computation; the override settings are
/// supplied explicitly at construction so call sites carry no hidden
/// global state.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    banner: HolidayBannerSettings,
}

impl HolidayCalendar {
    pub fn new(banner: HolidayBannerSettings) -> Self {
        Self { banner }
    }

    /// Pure date check, ignoring overrides: is `date` inside any of the
    /// three promotional windows?
    ///
    /// The New Year span is checked both anchored in `date`'s year and in
    /// the previous year, which covers the first days of January.
    pub fn in_promotional_window(date: NaiveDate) -> bool {
        let year = date.year();
        HolidayWindow::for_year(year)
            .into_iter()
            .chain(HolidayWindow::new_year_span(year - 1))
            .any(|window| window.contains(date))
    }

    /// Override-aware check: force-show wins, then disable, then the
    /// auto-enable gate, then the date computation.
    pub fn is_active_period(&self, date: NaiveDate) -> bool {
        if self.banner.force_show {
            return true;
        }
        if self.banner.disable {
            return false;
        }
        if !self.banner.auto_enabled() {
            return false;
        }
        Self::in_promotional_window(date)
    }

    /// Banner copy: the admin's custom text, or the default.
    pub fn banner_text(&self) -> &str {
        self.banner
            .custom_text
            .as_deref()
            .unwrap_or(DEFAULT_BANNER_TEXT)
    }
}
