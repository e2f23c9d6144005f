//! Normalization of instants to Japan Standard Time calendar dates.
//!
//! A holiday is a property of a *Japanese* calendar day, so every instant is
//! first viewed through the fixed UTC+9 offset and only then reduced to a
//! [`CalendarDate`].  The conversion never consults the host's local zone.
//!
//! | input | resulting date |
//! |-------|----------------|
//! | `DateTime<Tz>` (any `Tz`) | date of the instant as observed at UTC+9 |
//! | `NaiveDate` | the same date (already a date-only JST day) |
//! | `CalendarDate` | itself |

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

use crate::date::CalendarDate;

/// Offset of Japan Standard Time from UTC, in seconds.
pub const JST_OFFSET_SECS: i32 = 9 * 60 * 60;

/// The fixed UTC+9 offset used for all normalization.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("UTC+9 is a valid fixed offset")
}

/// Anything that can be reduced to the JST calendar date it falls on.
pub trait ToCalendarDate {
    /// Return the calendar date as observed in Japan Standard Time.
    fn to_calendar_date(&self) -> CalendarDate;
}

// UTC+9 can only push an instant past the top of chrono's range; such
// instants saturate to `CalendarDate::MAX`.
impl<Tz: TimeZone> ToCalendarDate for DateTime<Tz> {
    fn to_calendar_date(&self) -> CalendarDate {
        self.naive_utc()
            .checked_add_offset(jst())
            .map_or(CalendarDate::MAX, |local| local.date().into())
    }
}

impl ToCalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> CalendarDate {
        (*self).into()
    }
}

impl ToCalendarDate for CalendarDate {
    fn to_calendar_date(&self) -> CalendarDate {
        *self
    }
}

impl<T: ToCalendarDate + ?Sized> ToCalendarDate for &T {
    fn to_calendar_date(&self) -> CalendarDate {
        (**self).to_calendar_date()
    }
}
