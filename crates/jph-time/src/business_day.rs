//! Business-day arithmetic on a [`Calendar`].
//!
//! A business day is a date that is neither Saturday nor Sunday nor a
//! holiday of the calendar it is asked of (custom holidays count, removed
//! built-in holidays do not).

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::Calendar;
use crate::date::CalendarDate;
use crate::instant::ToCalendarDate;

/// Number of candidate dates (including the start date) examined by
/// [`Calendar::next_business_day`] and [`Calendar::previous_business_day`]
/// before they give up.
pub const BUSINESS_DAY_SEARCH_LIMIT: u32 = 366;

impl Calendar {
    /// Return `true` if the JST date of `instant` is a Saturday or Sunday.
    pub fn is_weekend(&self, instant: impl ToCalendarDate) -> bool {
        instant.to_calendar_date().is_weekend()
    }

    /// Return `true` if the JST date of `instant` is neither a weekend day nor
    /// a holiday of this calendar.
    pub fn is_business_day(&self, instant: impl ToCalendarDate) -> bool {
        let date = instant.to_calendar_date();
        !date.is_weekend() && !self.is_holiday(date)
    }

    /// The first business day on or after the JST date of `instant`.
    ///
    /// Returns `None` if no business day is found among
    /// [`BUSINESS_DAY_SEARCH_LIMIT`] candidates, or if the search runs off the
    /// end of the representable date range.
    pub fn next_business_day(&self, instant: impl ToCalendarDate) -> Option<NaiveDate> {
        self.search_business_day(instant.to_calendar_date(), CalendarDate::succ)
    }

    /// The last business day on or before the JST date of `instant`.
    ///
    /// Returns `None` under the same conditions as
    /// [`Calendar::next_business_day`].
    pub fn previous_business_day(&self, instant: impl ToCalendarDate) -> Option<NaiveDate> {
        self.search_business_day(instant.to_calendar_date(), CalendarDate::pred)
    }

    fn search_business_day(
        &self,
        start: CalendarDate,
        step: fn(CalendarDate) -> Option<CalendarDate>,
    ) -> Option<NaiveDate> {
        let mut candidate = start;
        for i in 0..BUSINESS_DAY_SEARCH_LIMIT {
            if self.is_business_day(candidate) {
                return Some(candidate.naive());
            }
            if i + 1 == BUSINESS_DAY_SEARCH_LIMIT {
                break;
            }
            match step(candidate) {
                Some(next) => candidate = next,
                None => {
                    debug!(%start, "business-day search ran off the date range");
                    return None;
                }
            }
        }
        debug!(
            %start,
            limit = BUSINESS_DAY_SEARCH_LIMIT,
            "no business day within search limit"
        );
        None
    }

    /// Number of business days in `[from, to]`, both ends inclusive.
    ///
    /// Returns 0 if `from` is after `to`.
    pub fn business_days_between(
        &self,
        from: impl ToCalendarDate,
        to: impl ToCalendarDate,
    ) -> u32 {
        let from = from.to_calendar_date();
        let to = to.to_calendar_date();
        if from > to {
            return 0;
        }
        let mut count = 0;
        let mut day = Some(from);
        while let Some(d) = day.filter(|d| *d <= to) {
            if self.is_business_day(d) {
                count += 1;
            }
            day = d.succ();
        }
        count
    }
}
