//! Tests for the free functions over the default calendar.
//!
//! All tests in this binary share one default calendar, so every test that
//! mutates it works on its own dates far outside the built-in dataset.

use std::sync::Arc;

use chrono::{FixedOffset, Month, NaiveDate, TimeZone};
use jpholiday::{Calendar, OverlayConfig};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn builtin_queries() {
    assert!(jpholiday::is_holiday(date(2026, 1, 1)));
    assert_eq!(jpholiday::holiday_name(date(2026, 1, 1)).as_deref(), Some("元日"));
    assert_eq!(jpholiday::holidays_in_year(2026).len(), 18);
    assert_eq!(jpholiday::holidays_in_month(2026, Month::May).len(), 4);
    assert_eq!(
        jpholiday::holidays_between(date(2026, 9, 19), date(2026, 9, 23)).len(),
        3
    );
    let all = jpholiday::all_holidays();
    assert_eq!(all.first().map(|h| h.date()), Some(date(1955, 1, 1)));
    assert!(all.iter().any(|h| h.date() == date(2026, 9, 22)));
}

#[test]
fn business_day_queries() {
    assert!(!jpholiday::is_business_day(date(2026, 6, 6)));
    assert_eq!(jpholiday::next_business_day(date(2026, 6, 6)), Some(date(2026, 6, 8)));
    assert_eq!(jpholiday::previous_business_day(date(2026, 6, 6)), Some(date(2026, 6, 5)));
    assert_eq!(jpholiday::business_days_between(date(2026, 4, 29), date(2026, 5, 6)), 2);
}

#[test]
fn holiday_search() {
    let jst = FixedOffset::east_opt(9 * 3600).unwrap();
    let noon = jst.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(
        jpholiday::next_holiday(noon).map(|h| h.date()),
        Some(date(2026, 1, 12))
    );
    assert_eq!(
        jpholiday::previous_holiday(date(2026, 1, 12)).map(|h| h.date()),
        Some(date(2026, 1, 1))
    );
}

#[test]
fn custom_holiday_round_trip() {
    let day = date(2201, 6, 15);
    jpholiday::add_custom_holiday(day, "記念日");
    assert_eq!(jpholiday::holiday_name(day).as_deref(), Some("記念日"));
    assert!(!jpholiday::is_business_day(day));
    jpholiday::remove_custom_holiday(day);
    assert!(!jpholiday::is_holiday(day));
}

#[test]
fn remove_and_restore_on_default_calendar() {
    // 1955-11-03 is not used by any other test in this binary.
    let day = date(1955, 11, 3);
    jpholiday::remove_holiday(day);
    assert!(!jpholiday::is_holiday(day));
    jpholiday::restore_holiday(day);
    assert_eq!(jpholiday::holiday_name(day).as_deref(), Some("文化の日"));
}

#[test]
fn default_calendar_is_shared_but_new_calendars_are_not() {
    assert!(Arc::ptr_eq(&jpholiday::default_calendar(), &jpholiday::default_calendar()));

    let day = date(2202, 2, 2);
    let own = Calendar::new();
    own.add_custom_holiday(day, "local");
    assert!(!jpholiday::is_holiday(day));

    jpholiday::default_calendar().add_custom_holiday(day, "shared");
    assert_eq!(jpholiday::holiday_name(day).as_deref(), Some("shared"));
    assert_eq!(own.holiday_name(day).as_deref(), Some("local"));
    jpholiday::remove_custom_holiday(day);
}

#[test]
fn overlay_config_builds_isolated_calendar() {
    let mut config = OverlayConfig::default();
    config.add_custom(date(2203, 3, 3).into(), "config");
    let cal = Calendar::from_overlay(&config).unwrap();
    assert!(cal.is_holiday(date(2203, 3, 3)));
    assert!(!jpholiday::is_holiday(date(2203, 3, 3)));

    config.add_custom(date(2203, 3, 4).into(), " ");
    assert!(matches!(
        Calendar::from_overlay(&config),
        Err(jpholiday::Error::InvalidArgument(_))
    ));
}
