//! # jph-time
//!
//! Calendar dates, JST normalization, the built-in Japanese holiday dataset,
//! and the holiday calendar engine with business-day arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day predicates and searches on a `Calendar`.
pub mod business_day;

/// `Calendar` — the holiday calendar engine.
pub mod calendar;

/// Immutable sorted holiday dataset.
pub mod dataset;

/// `CalendarDate` type.
pub mod date;

/// Process-wide default calendar.
pub mod default_calendar;

/// `Holiday` — a named holiday date.
pub mod holiday;

mod holidays_data;

/// Instant-to-date normalization in Japan Standard Time.
pub mod instant;

/// Declarative overlay configuration.
pub mod overlay_config;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day::BUSINESS_DAY_SEARCH_LIMIT;
pub use calendar::Calendar;
pub use dataset::{Dataset, DatasetEntry};
pub use date::CalendarDate;
pub use default_calendar::default_calendar;
pub use holiday::Holiday;
pub use instant::{jst, ToCalendarDate, JST_OFFSET_SECS};
pub use overlay_config::{CustomHolidayEntry, OverlayConfig};
