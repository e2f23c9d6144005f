//! `CalendarDate` — a time-zone-free (year, month, day) value.
//!
//! Every instant handed to the engine collapses into a `CalendarDate` once it
//! has been normalized to Japan Standard Time (see [`crate::instant`]).  After
//! that point the engine never looks at offsets or time-of-day again.
//!
//! The valid range is the range of [`chrono::NaiveDate`]; ordering is
//! lexicographic on (year, month, day), which is also chronological order.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use jph_core::errors::{Error, Result};
use jph_core::fail;

/// A calendar date with no time zone and no time of day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

// ── Constants ─────────────────────────────────────────────────────────────────

impl CalendarDate {
    /// Earliest representable date.
    pub const MIN: CalendarDate = CalendarDate(NaiveDate::MIN);

    /// Latest representable date.
    pub const MAX: CalendarDate = CalendarDate(NaiveDate::MAX);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Ok(CalendarDate(date));
        }
        match Self::last_of_month(year, month) {
            Some(last) => Err(Error::Date(format!(
                "day {day} out of range [1, {}] for {year}-{month:02}",
                last.day()
            ))),
            None => Err(Error::Date(format!("year {year} out of representable range"))),
        }
    }

    /// First day of the given month, or `None` if the month is invalid or the
    /// year is out of range.
    pub fn first_of_month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(CalendarDate)
    }

    /// Last day of the given month (leap-year aware).
    pub fn last_of_month(year: i32, month: u32) -> Option<Self> {
        match month {
            12 => NaiveDate::from_ymd_opt(year, 12, 31).map(CalendarDate),
            1..=11 => Self::first_of_month(year, month + 1)?.pred(),
            _ => None,
        }
    }

    /// Return `true` if this date's year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Return the weekday of this date.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Return `true` if this date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return the date as a naive (offset-free, midnight) `chrono` date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// The following day, or `None` at [`CalendarDate::MAX`].
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(CalendarDate)
    }

    /// The preceding day, or `None` at [`CalendarDate::MIN`].
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(CalendarDate)
    }

    /// Number of calendar days from `self` to `other` (positive if `other`
    /// is later).
    pub fn days_until(self, other: CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({self})")
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parse an ISO 8601 date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            fail!("expected YYYY-MM-DD, got {s:?}");
        }
        let (Ok(year), Ok(month), Ok(day)) = (
            parts[0].parse::<i32>(),
            parts[1].parse::<u32>(),
            parts[2].parse::<u32>(),
        ) else {
            fail!("expected YYYY-MM-DD, got {s:?}");
        };
        CalendarDate::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CalendarDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
