//! `Holiday` — a named holiday on a specific date.

use std::fmt;

use chrono::NaiveDate;

use crate::date::CalendarDate;

/// A single holiday entry returned by calendar queries.
///
/// The date is date-only (no offset, no time of day); the name is the
/// Japanese name of the holiday (e.g. `"元日"`) or the name a caller gave a
/// custom holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    date: NaiveDate,
    name: String,
}

impl Holiday {
    /// Create a holiday entry.
    pub fn new(date: impl Into<NaiveDate>, name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
        }
    }

    /// The date of the holiday.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date of the holiday as a [`CalendarDate`].
    pub fn calendar_date(&self) -> CalendarDate {
        self.date.into()
    }

    /// The holiday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Split into `(date, name)`.
    pub fn into_parts(self) -> (NaiveDate, String) {
        (self.date, self.name)
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date.format("%Y-%m-%d"), self.name)
    }
}
