//! Declarative description of a calendar overlay.
//!
//! An [`OverlayConfig`] lists custom holidays and suppressed built-in dates.
//! With the `serde` feature (on by default) it can be loaded from or written
//! to any serde format; dates are `"YYYY-MM-DD"` strings.
//!
//! ```
//! use jph_time::{Calendar, CalendarDate, OverlayConfig};
//!
//! let mut config = OverlayConfig::default();
//! config.add_custom(CalendarDate::from_ymd(2026, 6, 15).unwrap(), "創立記念日");
//! config.add_removed(CalendarDate::from_ymd(2026, 1, 12).unwrap());
//!
//! let cal = Calendar::from_overlay(&config).unwrap();
//! assert!(cal.is_holiday(CalendarDate::from_ymd(2026, 6, 15).unwrap()));
//! assert!(!cal.is_holiday(CalendarDate::from_ymd(2026, 1, 12).unwrap()));
//! assert_eq!(cal.overlay(), config);
//! ```

use jph_core::ensure;
use jph_core::errors::Result;
use tracing::debug;

use crate::calendar::Calendar;
use crate::date::CalendarDate;

/// One custom holiday in an [`OverlayConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomHolidayEntry {
    /// Date of the holiday.
    pub date: CalendarDate,
    /// Holiday name.
    pub name: String,
}

/// Custom holidays and suppressed built-in dates for a [`Calendar`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayConfig {
    /// Custom holidays. A later entry for the same date overwrites an earlier
    /// one when applied.
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom: Vec<CustomHolidayEntry>,
    /// Dates whose built-in holiday is suppressed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub removed: Vec<CalendarDate>,
}

impl OverlayConfig {
    /// Append a custom holiday.
    pub fn add_custom(&mut self, date: CalendarDate, name: impl Into<String>) -> &mut Self {
        self.custom.push(CustomHolidayEntry {
            date,
            name: name.into(),
        });
        self
    }

    /// Append a suppressed built-in date.
    pub fn add_removed(&mut self, date: CalendarDate) -> &mut Self {
        self.removed.push(date);
        self
    }

    /// Return `true` if the config has no entries.
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty() && self.removed.is_empty()
    }

    /// Check that every custom holiday has a non-blank name.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.custom {
            ensure!(
                !entry.name.trim().is_empty(),
                "custom holiday on {} has an empty name",
                entry.date
            );
        }
        Ok(())
    }
}

impl Calendar {
    /// Build a calendar over the built-in dataset with `config` applied.
    pub fn from_overlay(config: &OverlayConfig) -> Result<Self> {
        let cal = Calendar::new();
        cal.apply_overlay(config)?;
        Ok(cal)
    }

    /// Validate `config`, then apply all of its entries atomically.
    ///
    /// Custom entries overwrite existing custom holidays on the same date;
    /// removed dates are added to the suppressed set. Nothing is applied if
    /// validation fails.
    pub fn apply_overlay(&self, config: &OverlayConfig) -> Result<()> {
        config.validate()?;
        debug!(
            custom = config.custom.len(),
            removed = config.removed.len(),
            "applying overlay config"
        );
        let mut overlay = self.write();
        overlay.custom.extend(
            config
                .custom
                .iter()
                .map(|entry| (entry.date, entry.name.clone())),
        );
        overlay.removed.extend(config.removed.iter().copied());
        Ok(())
    }

    /// Snapshot of this calendar's overlay, sorted by date.
    pub fn overlay(&self) -> OverlayConfig {
        let overlay = self.read();
        OverlayConfig {
            custom: overlay
                .custom
                .iter()
                .map(|(date, name)| CustomHolidayEntry {
                    date: *date,
                    name: name.clone(),
                })
                .collect(),
            removed: overlay.removed.iter().copied().collect(),
        }
    }
}
