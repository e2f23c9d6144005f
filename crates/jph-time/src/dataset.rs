//! `Dataset` — the immutable table of built-in holidays.
//!
//! The built-in table is generated ahead of time from the Cabinet Office
//! holiday list and compiled in as static data (`holidays_data.rs`); nothing is
//! parsed at run time.  It is turned into a sorted, binary-searchable array the
//! first time it is needed and shared by every [`Calendar`](crate::Calendar)
//! from then on.
//!
//! A `Dataset` is never mutated after construction, so it can be read from any
//! number of threads without synchronization.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use tracing::{debug, warn};

use crate::date::CalendarDate;
use crate::holidays_data::BUILTIN_HOLIDAYS;

/// One `(date, name)` row of a dataset.
pub type DatasetEntry = (CalendarDate, Cow<'static, str>);

/// An immutable mapping from date to holiday name, sorted by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<DatasetEntry>,
}

static BUILTIN: LazyLock<Arc<Dataset>> = LazyLock::new(|| {
    let dataset = Dataset::from_static_rows(BUILTIN_HOLIDAYS);
    debug!(
        entries = dataset.len(),
        first = %dataset.first_date().map(|d| d.to_string()).unwrap_or_default(),
        last = %dataset.last_date().map(|d| d.to_string()).unwrap_or_default(),
        "built-in holiday dataset loaded"
    );
    Arc::new(dataset)
});

impl Dataset {
    /// The process-wide built-in Japanese holiday dataset.
    pub fn builtin() -> Arc<Dataset> {
        Arc::clone(&BUILTIN)
    }

    /// Build a dataset from arbitrary `(date, name)` pairs.
    ///
    /// The entries are sorted by date; if the same date appears more than
    /// once, the last occurrence wins.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (CalendarDate, S)>,
        S: Into<Cow<'static, str>>,
    {
        let mut entries: Vec<DatasetEntry> = entries
            .into_iter()
            .map(|(date, name)| (date, name.into()))
            .collect();
        // Stable sort keeps input order among equal dates, so keeping the
        // last of each run implements "last occurrence wins".
        entries.sort_by_key(|(date, _)| *date);
        let mut deduped: Vec<DatasetEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            match deduped.last_mut() {
                Some(last) if last.0 == entry.0 => *last = entry,
                _ => deduped.push(entry),
            }
        }
        Self { entries: deduped }
    }

    fn from_static_rows(rows: &'static [(i32, u8, u8, &'static str)]) -> Self {
        Self::from_entries(rows.iter().filter_map(|&(y, m, d, name)| {
            match CalendarDate::from_ymd(y, u32::from(m), u32::from(d)) {
                Ok(date) => Some((date, name)),
                Err(err) => {
                    warn!(year = y, month = m, day = d, name, %err, "dropping invalid holiday row");
                    None
                }
            }
        }))
    }

    /// Holiday name on `date`, if the dataset has one.
    pub fn get(&self, date: CalendarDate) -> Option<&str> {
        self.entries
            .binary_search_by_key(&date, |(d, _)| *d)
            .ok()
            .map(|i| &*self.entries[i].1)
    }

    /// Whether the dataset has a holiday on `date`.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.get(date).is_some()
    }

    /// Entries with `from <= date <= to`, in ascending order.
    ///
    /// Empty when `from > to`.
    pub fn range(&self, from: CalendarDate, to: CalendarDate) -> &[DatasetEntry] {
        if from > to {
            return &[];
        }
        let start = self.entries.partition_point(|(d, _)| *d < from);
        let end = self.entries.partition_point(|(d, _)| *d <= to);
        &self.entries[start..end]
    }

    /// Entries strictly after `date`, in ascending order.
    pub fn after(&self, date: CalendarDate) -> &[DatasetEntry] {
        let start = self.entries.partition_point(|(d, _)| *d <= date);
        &self.entries[start..]
    }

    /// Entries strictly before `date`, in ascending order.
    pub fn before(&self, date: CalendarDate) -> &[DatasetEntry] {
        let end = self.entries.partition_point(|(d, _)| *d < date);
        &self.entries[..end]
    }

    /// Iterate over all entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (CalendarDate, &str)> + '_ {
        self.entries.iter().map(|(d, name)| (*d, &**name))
    }

    /// Number of holidays in the dataset.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest holiday in the dataset.
    pub fn first_date(&self) -> Option<CalendarDate> {
        self.entries.first().map(|(d, _)| *d)
    }

    /// Latest holiday in the dataset.
    pub fn last_date(&self) -> Option<CalendarDate> {
        self.entries.last().map(|(d, _)| *d)
    }
}
