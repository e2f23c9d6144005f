//! `Calendar` — the holiday calendar engine.
//!
//! A calendar layers a caller-mutable *overlay* on top of an immutable
//! [`Dataset`]:
//!
//! * `custom` — holidays added by the caller; they always win over the
//!   dataset on the same date.
//! * `removed` — built-in holidays suppressed for this calendar; they never
//!   affect `custom` entries.
//!
//! Lookups resolve in that order: custom, then removed, then the dataset.
//! The overlay sits behind a single reader/writer lock, so queries run
//! concurrently with each other while the four mutators are exclusive.
//! Separate `Calendar` values share nothing but the (immutable) dataset.
//!
//! Business-day operations live in [`crate::business_day`].

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Month, NaiveDate};
use tracing::debug;

use crate::dataset::Dataset;
use crate::date::CalendarDate;
use crate::holiday::Holiday;
use crate::instant::ToCalendarDate;

/// Per-calendar overlay state.
#[derive(Debug, Default)]
pub(crate) struct Overlay {
    pub(crate) custom: BTreeMap<CalendarDate, String>,
    pub(crate) removed: BTreeSet<CalendarDate>,
}

impl Overlay {
    fn lookup<'a>(&'a self, dataset: &'a Dataset, date: CalendarDate) -> Option<&'a str> {
        if let Some(name) = self.custom.get(&date) {
            return Some(name);
        }
        if self.removed.contains(&date) {
            return None;
        }
        dataset.get(date)
    }
}

/// A Japanese holiday calendar with its own custom/removed overlay.
///
/// All methods take `&self` and are safe to call from many threads at once.
///
/// ```
/// use chrono::NaiveDate;
/// use jph_time::Calendar;
///
/// let cal = Calendar::new();
/// let day = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
/// assert!(!cal.is_holiday(day));
///
/// cal.add_custom_holiday(day, "会社記念日");
/// assert_eq!(cal.holiday_name(day).as_deref(), Some("会社記念日"));
/// ```
#[derive(Debug)]
pub struct Calendar {
    dataset: Arc<Dataset>,
    overlay: RwLock<Overlay>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar {
    /// Create a calendar backed by the built-in dataset, with an empty
    /// overlay.
    pub fn new() -> Self {
        Self::with_dataset(Dataset::builtin())
    }

    /// Create a calendar backed by `dataset`, with an empty overlay.
    pub fn with_dataset(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            overlay: RwLock::new(Overlay::default()),
        }
    }

    /// The dataset this calendar reads built-in holidays from.
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    // Every overlay write is a single map operation, so a poisoned lock
    // still guards consistent maps.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Overlay> {
        self.overlay.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Overlay> {
        self.overlay.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Lookup ───────────────────────────────────────────────────────────────

    /// Return `true` if the JST date of `instant` is a holiday (custom or
    /// built-in, unless removed).
    pub fn is_holiday(&self, instant: impl ToCalendarDate) -> bool {
        let date = instant.to_calendar_date();
        self.read().lookup(&self.dataset, date).is_some()
    }

    /// Name of the holiday on the JST date of `instant`, or `None` if it is
    /// not a holiday.
    pub fn holiday_name(&self, instant: impl ToCalendarDate) -> Option<String> {
        let date = instant.to_calendar_date();
        self.read().lookup(&self.dataset, date).map(str::to_owned)
    }

    /// The holiday on the JST date of `instant`, if any.
    pub fn holiday(&self, instant: impl ToCalendarDate) -> Option<Holiday> {
        let date = instant.to_calendar_date();
        self.read()
            .lookup(&self.dataset, date)
            .map(|name| Holiday::new(date, name))
    }

    // ── Enumeration ──────────────────────────────────────────────────────────

    /// All holidays in `year`, sorted by date.
    pub fn holidays_in_year(&self, year: i32) -> Vec<Holiday> {
        match (
            CalendarDate::first_of_month(year, 1),
            CalendarDate::last_of_month(year, 12),
        ) {
            (Some(from), Some(to)) => self.scan(from, to),
            _ => Vec::new(),
        }
    }

    /// All holidays in the given month, sorted by date.
    pub fn holidays_in_month(&self, year: i32, month: Month) -> Vec<Holiday> {
        let m = month.number_from_month();
        match (
            CalendarDate::first_of_month(year, m),
            CalendarDate::last_of_month(year, m),
        ) {
            (Some(from), Some(to)) => self.scan(from, to),
            _ => Vec::new(),
        }
    }

    /// All holidays in `[from, to]` (inclusive, JST dates), sorted by date.
    ///
    /// Returns an empty list if `from` is after `to`.
    pub fn holidays_between(
        &self,
        from: impl ToCalendarDate,
        to: impl ToCalendarDate,
    ) -> Vec<Holiday> {
        self.scan(from.to_calendar_date(), to.to_calendar_date())
    }

    /// Every holiday known to this calendar (built-in plus custom, minus
    /// removed), sorted by date.
    ///
    /// A date with both a built-in and a custom holiday appears once, with
    /// the custom name.
    pub fn all_holidays(&self) -> Vec<Holiday> {
        self.scan(CalendarDate::MIN, CalendarDate::MAX)
    }

    /// Range scan shared by every enumeration query.
    fn scan(&self, from: CalendarDate, to: CalendarDate) -> Vec<Holiday> {
        if from > to {
            return Vec::new();
        }
        let overlay = self.read();
        let mut result: Vec<Holiday> = self
            .dataset
            .range(from, to)
            .iter()
            .filter(|(d, _)| !overlay.removed.contains(d) && !overlay.custom.contains_key(d))
            .map(|(d, name)| Holiday::new(*d, name.clone()))
            .chain(
                overlay
                    .custom
                    .range(from..=to)
                    .map(|(d, name)| Holiday::new(*d, name.as_str())),
            )
            .collect();
        drop(overlay);
        result.sort_unstable_by_key(Holiday::date);
        result
    }

    // ── Next / previous holiday ──────────────────────────────────────────────

    /// The first holiday strictly after the JST date of `instant`.
    ///
    /// Returns `None` if there is none (past the end of the dataset and no
    /// later custom holiday).
    pub fn next_holiday(&self, instant: impl ToCalendarDate) -> Option<Holiday> {
        let date = instant.to_calendar_date();
        let overlay = self.read();
        let builtin = self
            .dataset
            .after(date)
            .iter()
            .map(|(d, _)| *d)
            .find(|d| !overlay.removed.contains(d));
        let custom = overlay
            .custom
            .range((Excluded(date), Unbounded))
            .next()
            .map(|(d, _)| *d);
        let best = match (builtin, custom) {
            (Some(b), Some(c)) => b.min(c),
            (b, c) => b.or(c)?,
        };
        overlay
            .lookup(&self.dataset, best)
            .map(|name| Holiday::new(best, name))
    }

    /// The last holiday strictly before the JST date of `instant`.
    ///
    /// Returns `None` if there is none.
    pub fn previous_holiday(&self, instant: impl ToCalendarDate) -> Option<Holiday> {
        let date = instant.to_calendar_date();
        let overlay = self.read();
        let builtin = self
            .dataset
            .before(date)
            .iter()
            .rev()
            .map(|(d, _)| *d)
            .find(|d| !overlay.removed.contains(d));
        let custom = overlay
            .custom
            .range((Unbounded, Excluded(date)))
            .next_back()
            .map(|(d, _)| *d);
        let best = match (builtin, custom) {
            (Some(b), Some(c)) => b.max(c),
            (b, c) => b.or(c)?,
        };
        overlay
            .lookup(&self.dataset, best)
            .map(|name| Holiday::new(best, name))
    }

    // ── Overlay mutation ─────────────────────────────────────────────────────

    /// Register a custom holiday on the JST date of `instant`.
    ///
    /// An existing custom holiday on that date is overwritten. A custom
    /// holiday takes precedence over a built-in one on the same date, even if
    /// the built-in one has been removed.
    pub fn add_custom_holiday(&self, instant: impl ToCalendarDate, name: impl Into<String>) {
        let date = instant.to_calendar_date();
        let name = name.into();
        debug!(%date, %name, "adding custom holiday");
        self.write().custom.insert(date, name);
    }

    /// Remove a custom holiday. No effect if there is none on that date.
    pub fn remove_custom_holiday(&self, instant: impl ToCalendarDate) {
        let date = instant.to_calendar_date();
        debug!(%date, "removing custom holiday");
        self.write().custom.remove(&date);
    }

    /// Suppress the built-in holiday on the JST date of `instant`.
    ///
    /// Custom holidays are unaffected. Use [`Calendar::restore_holiday`] to
    /// undo.
    pub fn remove_holiday(&self, instant: impl ToCalendarDate) {
        let date = instant.to_calendar_date();
        debug!(%date, "suppressing built-in holiday");
        self.write().removed.insert(date);
    }

    /// Restore a previously suppressed built-in holiday. No effect if the
    /// date was not suppressed.
    pub fn restore_holiday(&self, instant: impl ToCalendarDate) {
        let date = instant.to_calendar_date();
        debug!(%date, "restoring built-in holiday");
        self.write().removed.remove(&date);
    }

    // ── Overlay inspection ───────────────────────────────────────────────────

    /// Custom holidays registered on this calendar, sorted by date.
    pub fn custom_holidays(&self) -> Vec<Holiday> {
        self.read()
            .custom
            .iter()
            .map(|(d, name)| Holiday::new(*d, name.as_str()))
            .collect()
    }

    /// Dates whose built-in holiday is suppressed on this calendar, sorted.
    pub fn removed_dates(&self) -> Vec<NaiveDate> {
        self.read().removed.iter().map(|d| d.naive()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn small_calendar() -> Calendar {
        Calendar::with_dataset(Arc::new(Dataset::from_entries([
            (date(2030, 1, 1), "A"),
            (date(2030, 1, 10), "B"),
            (date(2030, 2, 1), "C"),
        ])))
    }

    #[test]
    fn lookup_precedence() {
        let cal = small_calendar();
        assert_eq!(cal.holiday_name(date(2030, 1, 1)).as_deref(), Some("A"));

        cal.remove_holiday(date(2030, 1, 1));
        assert!(!cal.is_holiday(date(2030, 1, 1)));

        // custom beats removed
        cal.add_custom_holiday(date(2030, 1, 1), "X");
        assert_eq!(cal.holiday_name(date(2030, 1, 1)).as_deref(), Some("X"));

        cal.remove_custom_holiday(date(2030, 1, 1));
        assert!(!cal.is_holiday(date(2030, 1, 1)));

        cal.restore_holiday(date(2030, 1, 1));
        assert_eq!(cal.holiday_name(date(2030, 1, 1)).as_deref(), Some("A"));
    }

    #[test]
    fn holiday_value() {
        let cal = small_calendar();
        let h = cal.holiday(date(2030, 1, 10)).unwrap();
        assert_eq!(h.calendar_date(), date(2030, 1, 10));
        assert_eq!(h.name(), "B");
        assert!(cal.holiday(date(2030, 1, 11)).is_none());
    }

    #[test]
    fn scan_merges_without_duplicates() {
        let cal = small_calendar();
        cal.add_custom_holiday(date(2030, 1, 10), "B'");
        cal.add_custom_holiday(date(2030, 1, 5), "Y");
        cal.remove_holiday(date(2030, 2, 1));

        let all = cal.all_holidays();
        let got: Vec<_> = all.iter().map(|h| (h.calendar_date(), h.name())).collect();
        assert_eq!(
            got,
            vec![
                (date(2030, 1, 1), "A"),
                (date(2030, 1, 5), "Y"),
                (date(2030, 1, 10), "B'"),
            ]
        );
    }

    #[test]
    fn scan_reversed_range_is_empty() {
        let cal = small_calendar();
        assert!(cal
            .holidays_between(date(2030, 12, 31), date(2030, 1, 1))
            .is_empty());
    }

    #[test]
    fn out_of_range_year_is_empty() {
        let cal = small_calendar();
        assert!(cal.holidays_in_year(i32::MAX).is_empty());
        assert!(cal.holidays_in_month(i32::MIN, Month::January).is_empty());
    }

    #[test]
    fn next_and_previous_prefer_custom_name_on_shared_date() {
        let cal = small_calendar();
        cal.add_custom_holiday(date(2030, 1, 10), "custom");
        assert_eq!(
            cal.next_holiday(date(2030, 1, 1)).map(|h| h.name().to_owned()),
            Some("custom".to_owned())
        );
        assert_eq!(
            cal.previous_holiday(date(2030, 2, 1)).map(|h| h.name().to_owned()),
            Some("custom".to_owned())
        );
    }

    #[test]
    fn next_skips_removed_builtin() {
        let cal = small_calendar();
        cal.remove_holiday(date(2030, 1, 10));
        let next = cal.next_holiday(date(2030, 1, 1)).unwrap();
        assert_eq!(next.calendar_date(), date(2030, 2, 1));
        let prev = cal.previous_holiday(date(2030, 2, 1)).unwrap();
        assert_eq!(prev.calendar_date(), date(2030, 1, 1));
    }

    #[test]
    fn next_and_previous_are_strict() {
        let cal = small_calendar();
        assert_eq!(
            cal.next_holiday(date(2030, 1, 10)).map(|h| h.calendar_date()),
            Some(date(2030, 2, 1))
        );
        assert_eq!(
            cal.previous_holiday(date(2030, 1, 10)).map(|h| h.calendar_date()),
            Some(date(2030, 1, 1))
        );
        assert!(cal.next_holiday(date(2030, 2, 1)).is_none());
        assert!(cal.previous_holiday(date(2030, 1, 1)).is_none());
    }

    #[test]
    fn overlay_inspection() {
        let cal = small_calendar();
        cal.add_custom_holiday(date(2030, 3, 1), "late");
        cal.add_custom_holiday(date(2030, 1, 20), "early");
        cal.remove_holiday(date(2030, 2, 1));
        cal.remove_holiday(date(2030, 1, 1));

        let names: Vec<_> = cal
            .custom_holidays()
            .into_iter()
            .map(|h| h.name().to_owned())
            .collect();
        assert_eq!(names, vec!["early", "late"]);
        assert_eq!(
            cal.removed_dates(),
            vec![date(2030, 1, 1).naive(), date(2030, 2, 1).naive()]
        );
    }

    #[test]
    fn poisoned_overlay_lock_is_recovered() {
        let cal = Arc::new(small_calendar());
        cal.add_custom_holiday(date(2030, 3, 1), "before");

        let writer = Arc::clone(&cal);
        let joined = std::thread::spawn(move || {
            let mut overlay = writer.write();
            overlay.removed.insert(date(2030, 1, 1));
            panic!("writer panics while holding the overlay lock");
        })
        .join();
        assert!(joined.is_err());
        assert!(cal.overlay.is_poisoned());

        assert!(!cal.is_holiday(date(2030, 1, 1)));
        assert_eq!(cal.holiday_name(date(2030, 3, 1)).as_deref(), Some("before"));
        cal.add_custom_holiday(date(2030, 4, 1), "after");
        cal.restore_holiday(date(2030, 1, 1));
        assert_eq!(cal.holiday_name(date(2030, 1, 1)).as_deref(), Some("A"));
        assert_eq!(cal.holidays_in_year(2030).len(), 5);
    }
}
