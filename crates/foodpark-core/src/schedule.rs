//! Choosing which trading day to report on.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns `today` when it falls on `weekday`, otherwise the next such date.
#[must_use]
pub fn next_trading_day(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (7 + weekday.num_days_from_monday() - today.weekday().num_days_from_monday()) % 7;
    today + chrono::Duration::days(i64::from(ahead))
}

/// The calendar date an extraction targets, with its two textual renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDate {
    date: NaiveDate,
}

impl TargetDate {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `YYYY-MM-DD`; every order URL for the day embeds this verbatim.
    #[must_use]
    pub fn token(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// The page's date header for this day: `date_format` applied, upper-cased.
    ///
    /// `date_format` must already have been checked with
    /// [`validate_date_format`]; chrono panics at render time on unknown
    /// specifiers and on time or offset specifiers a date cannot supply.
    #[must_use]
    pub fn header(&self, date_format: &str) -> String {
        self.date.format(date_format).to_string().to_uppercase()
    }
}

/// Checks that `fmt` renders for a bare date.
///
/// # Errors
///
/// Returns a human-readable reason when a specifier is unknown or needs a
/// time or offset (`%H`, `%z`, ...).
pub fn validate_date_format(fmt: &str) -> Result<(), String> {
    use std::fmt::Write;

    use chrono::format::StrftimeItems;

    let mut rendered = String::new();
    write!(
        rendered,
        "{}",
        NaiveDate::MIN.format_with_items(StrftimeItems::new(fmt))
    )
    .map_err(|_| format!("\"{fmt}\" is not a valid date-only strftime format"))
}
