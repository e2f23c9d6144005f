//! # jpholiday
//!
//! Japanese national holidays, evaluated on Japan Standard Time calendar
//! days, with per-calendar custom holidays and business-day calculations.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates and adds free functions operating on the process-wide
//! default [`Calendar`]. Code that needs an isolated overlay should create
//! its own `Calendar` instead.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! jpholiday = "0.1"
//! ```
//!
//! ```rust
//! use chrono::{Month, NaiveDate};
//!
//! let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! assert!(jpholiday::is_holiday(new_year));
//! assert_eq!(jpholiday::holiday_name(new_year).as_deref(), Some("元日"));
//!
//! let may: Vec<String> = jpholiday::holidays_in_month(2024, Month::May)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(may[0], "2024-05-03: 憲法記念日");
//! ```
//!
//! Instants with an offset are read in JST:
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//!
//! // 2023-12-31T15:00Z is midnight on New Year's Day in Tokyo.
//! let instant = Utc.with_ymd_and_hms(2023, 12, 31, 15, 0, 0).unwrap();
//! assert!(jpholiday::is_holiday(instant));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use chrono::{Month, NaiveDate};

/// Error definitions.
pub use jph_core as core;

/// Dates, dataset, and the calendar engine.
pub use jph_time as time;

pub use jph_core::{Error, Result};
pub use jph_time::{
    default_calendar, Calendar, CalendarDate, CustomHolidayEntry, Dataset, Holiday,
    OverlayConfig, ToCalendarDate, BUSINESS_DAY_SEARCH_LIMIT,
};

// ── Default-calendar functions ────────────────────────────────────────────────

/// Return `true` if the JST date of `instant` is a holiday on the default
/// calendar.
pub fn is_holiday(instant: impl ToCalendarDate) -> bool {
    default_calendar().is_holiday(instant)
}

/// Holiday name for the JST date of `instant` on the default calendar.
pub fn holiday_name(instant: impl ToCalendarDate) -> Option<String> {
    default_calendar().holiday_name(instant)
}

/// All holidays in `year` on the default calendar, sorted by date.
pub fn holidays_in_year(year: i32) -> Vec<Holiday> {
    default_calendar().holidays_in_year(year)
}

/// All holidays in the given month on the default calendar, sorted by date.
pub fn holidays_in_month(year: i32, month: Month) -> Vec<Holiday> {
    default_calendar().holidays_in_month(year, month)
}

/// Holidays in `[from, to]` on the default calendar; empty if `from > to`.
pub fn holidays_between(from: impl ToCalendarDate, to: impl ToCalendarDate) -> Vec<Holiday> {
    default_calendar().holidays_between(from, to)
}

/// Every holiday on the default calendar, sorted by date.
pub fn all_holidays() -> Vec<Holiday> {
    default_calendar().all_holidays()
}

/// Add (or overwrite) a custom holiday on the default calendar.
pub fn add_custom_holiday(instant: impl ToCalendarDate, name: impl Into<String>) {
    default_calendar().add_custom_holiday(instant, name);
}

/// Remove a custom holiday from the default calendar.
pub fn remove_custom_holiday(instant: impl ToCalendarDate) {
    default_calendar().remove_custom_holiday(instant);
}

/// Suppress a built-in holiday on the default calendar.
pub fn remove_holiday(instant: impl ToCalendarDate) {
    default_calendar().remove_holiday(instant);
}

/// Restore a suppressed built-in holiday on the default calendar.
pub fn restore_holiday(instant: impl ToCalendarDate) {
    default_calendar().restore_holiday(instant);
}

/// Return `true` if the JST date of `instant` is a business day on the
/// default calendar.
pub fn is_business_day(instant: impl ToCalendarDate) -> bool {
    default_calendar().is_business_day(instant)
}

/// First holiday strictly after the JST date of `instant`.
pub fn next_holiday(instant: impl ToCalendarDate) -> Option<Holiday> {
    default_calendar().next_holiday(instant)
}

/// Last holiday strictly before the JST date of `instant`.
pub fn previous_holiday(instant: impl ToCalendarDate) -> Option<Holiday> {
    default_calendar().previous_holiday(instant)
}

/// First business day on or after the JST date of `instant`.
pub fn next_business_day(instant: impl ToCalendarDate) -> Option<NaiveDate> {
    default_calendar().next_business_day(instant)
}

/// Last business day on or before the JST date of `instant`.
pub fn previous_business_day(instant: impl ToCalendarDate) -> Option<NaiveDate> {
    default_calendar().previous_business_day(instant)
}

/// Number of business days in `[from, to]` on the default calendar; 0 if
/// `from > to`.
pub fn business_days_between(from: impl ToCalendarDate, to: impl ToCalendarDate) -> u32 {
    default_calendar().business_days_between(from, to)
}
