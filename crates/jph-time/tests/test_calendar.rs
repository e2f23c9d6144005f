//! Integration tests for holiday lookup, enumeration, overlay mutation, and
//! next/previous holiday search on `Calendar`.

use chrono::{DateTime, FixedOffset, Month, NaiveDate, TimeZone, Utc};
use jph_time::{Calendar, Dataset, Holiday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dates(holidays: &[Holiday]) -> Vec<NaiveDate> {
    holidays.iter().map(Holiday::date).collect()
}

// ── Built-in dataset ──────────────────────────────────────────────────────────

#[test]
fn new_years_day() {
    let cal = Calendar::new();
    assert!(cal.is_holiday(date(2026, 1, 1)));
    assert_eq!(cal.holiday_name(date(2026, 1, 1)).as_deref(), Some("元日"));
    assert!(!cal.is_holiday(date(2026, 1, 2)));
    assert_eq!(cal.holiday_name(date(2026, 1, 2)), None);
}

#[test]
fn substitute_and_citizens_holidays() {
    let cal = Calendar::new();
    // 2026-05-06: substitute for Constitution Day falling on Sunday
    assert_eq!(cal.holiday_name(date(2026, 5, 6)).as_deref(), Some("休日"));
    // 2026-09-22: sandwiched between 敬老の日 and 秋分の日
    assert_eq!(cal.holiday_name(date(2026, 9, 22)).as_deref(), Some("休日"));
    assert_eq!(cal.holiday_name(date(2026, 9, 21)).as_deref(), Some("敬老の日"));
    assert_eq!(cal.holiday_name(date(2026, 9, 23)).as_deref(), Some("秋分の日"));
}

#[test]
fn one_off_holidays() {
    let cal = Calendar::new();
    assert_eq!(cal.holiday_name(date(1959, 4, 10)).as_deref(), Some("結婚の儀"));
    assert_eq!(cal.holiday_name(date(1989, 2, 24)).as_deref(), Some("大喪の礼"));
    assert_eq!(
        cal.holiday_name(date(2019, 5, 1)).as_deref(),
        Some("休日（祝日扱い）")
    );
    // Olympic year moves
    assert_eq!(cal.holiday_name(date(2020, 7, 24)).as_deref(), Some("スポーツの日"));
    assert!(!cal.is_holiday(date(2020, 10, 12)));
}

#[test]
fn outside_dataset_is_not_a_holiday() {
    let cal = Calendar::new();
    assert!(!cal.is_holiday(date(1900, 1, 1)));
    assert!(!cal.is_holiday(date(2200, 1, 1)));
    assert!(cal.holidays_in_year(1900).is_empty());
}

// ── JST normalization ─────────────────────────────────────────────────────────

#[test]
fn instants_are_read_in_jst() {
    let cal = Calendar::new();
    // 2025-12-31T15:00Z is 2026-01-01T00:00 JST.
    let utc = Utc.with_ymd_and_hms(2025, 12, 31, 15, 0, 0).unwrap();
    assert!(cal.is_holiday(utc));
    assert_eq!(cal.holiday_name(utc).as_deref(), Some("元日"));
    let before = Utc.with_ymd_and_hms(2025, 12, 31, 14, 59, 59).unwrap();
    assert!(!cal.is_holiday(before));

    // 2026-01-01T08:59 JST observed from New York is still New Year's Eve there.
    let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
    let eve = new_york.with_ymd_and_hms(2025, 12, 31, 18, 59, 0).unwrap();
    assert!(cal.is_holiday(eve));
}

#[test]
fn instants_at_chrono_range_edges() {
    let cal = Calendar::new();
    assert!(!cal.is_holiday(DateTime::<Utc>::MAX_UTC));
    assert_eq!(cal.holiday_name(DateTime::<Utc>::MIN_UTC), None);
    assert!(cal.next_holiday(DateTime::<Utc>::MAX_UTC).is_none());
    assert!(cal.previous_holiday(DateTime::<Utc>::MIN_UTC).is_none());
    assert_eq!(
        cal.holidays_between(DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC).len(),
        Dataset::builtin().len()
    );
}

#[test]
fn instant_and_date_agree() {
    let cal = Calendar::new();
    let jst = FixedOffset::east_opt(9 * 3600).unwrap();
    let morning = jst.with_ymd_and_hms(2026, 5, 4, 0, 0, 0).unwrap();
    let night = jst.with_ymd_and_hms(2026, 5, 4, 23, 59, 59).unwrap();
    assert_eq!(cal.holiday(morning), cal.holiday(date(2026, 5, 4)));
    assert_eq!(cal.holiday(night), cal.holiday(date(2026, 5, 4)));
    assert_eq!(cal.next_holiday(night), cal.next_holiday(date(2026, 5, 4)));
}

// ── Enumeration ───────────────────────────────────────────────────────────────

#[test]
fn holidays_in_year_2026() {
    let cal = Calendar::new();
    let year = cal.holidays_in_year(2026);
    assert_eq!(year.len(), 18);
    assert_eq!(year.first().map(Holiday::date), Some(date(2026, 1, 1)));
    assert_eq!(year.last().map(Holiday::date), Some(date(2026, 11, 23)));
    assert!(year.windows(2).all(|w| w[0].date() < w[1].date()));
}

#[test]
fn holidays_in_month_may_2026() {
    let cal = Calendar::new();
    assert_eq!(
        dates(&cal.holidays_in_month(2026, Month::May)),
        vec![date(2026, 5, 3), date(2026, 5, 4), date(2026, 5, 5), date(2026, 5, 6)]
    );
    assert!(cal.holidays_in_month(2026, Month::June).is_empty());
}

#[test]
fn holidays_between_is_inclusive() {
    let cal = Calendar::new();
    let got = cal.holidays_between(date(2026, 4, 29), date(2026, 5, 5));
    assert_eq!(
        dates(&got),
        vec![date(2026, 4, 29), date(2026, 5, 3), date(2026, 5, 4), date(2026, 5, 5)]
    );
    assert!(cal
        .holidays_between(date(2026, 5, 5), date(2026, 4, 29))
        .is_empty());
}

#[test]
fn all_holidays_covers_dataset_and_custom() {
    let cal = Calendar::new();
    let builtin = cal.all_holidays();
    assert_eq!(builtin.len(), Dataset::builtin().len());

    cal.add_custom_holiday(date(2200, 6, 15), "future");
    cal.add_custom_holiday(date(1900, 6, 15), "past");
    cal.add_custom_holiday(date(2026, 1, 1), "renamed");
    let all = cal.all_holidays();
    assert_eq!(all.len(), builtin.len() + 2);
    assert_eq!(all.first().map(Holiday::date), Some(date(1900, 6, 15)));
    assert_eq!(all.last().map(Holiday::date), Some(date(2200, 6, 15)));
    let new_year: Vec<_> = all.iter().filter(|h| h.date() == date(2026, 1, 1)).collect();
    assert_eq!(new_year.len(), 1);
    assert_eq!(new_year[0].name(), "renamed");
}

// ── Overlay ───────────────────────────────────────────────────────────────────

#[test]
fn custom_holiday_add_overwrite_remove() {
    let cal = Calendar::new();
    let day = date(2026, 6, 15);
    cal.add_custom_holiday(day, "創立記念日");
    assert_eq!(cal.holiday_name(day).as_deref(), Some("創立記念日"));
    cal.add_custom_holiday(day, "改名");
    assert_eq!(cal.holiday_name(day).as_deref(), Some("改名"));
    assert_eq!(cal.custom_holidays().len(), 1);
    cal.remove_custom_holiday(day);
    assert!(!cal.is_holiday(day));
    // no-op on a date without a custom holiday
    cal.remove_custom_holiday(day);
    assert!(cal.custom_holidays().is_empty());
}

#[test]
fn remove_and_restore_builtin() {
    let cal = Calendar::new();
    let day = date(2026, 1, 12);
    cal.remove_holiday(day);
    assert!(!cal.is_holiday(day));
    assert!(!cal
        .holidays_in_month(2026, Month::January)
        .iter()
        .any(|h| h.date() == day));
    assert_eq!(cal.removed_dates(), vec![day]);
    cal.restore_holiday(day);
    assert_eq!(cal.holiday_name(day).as_deref(), Some("成人の日"));
    assert!(cal.removed_dates().is_empty());
}

#[test]
fn removal_does_not_hide_custom() {
    let cal = Calendar::new();
    let day = date(2026, 1, 1);
    cal.add_custom_holiday(day, "社内元日");
    cal.remove_holiday(day);
    assert_eq!(cal.holiday_name(day).as_deref(), Some("社内元日"));
    cal.remove_custom_holiday(day);
    assert!(!cal.is_holiday(day));
}

#[test]
fn instances_are_independent() {
    let a = Calendar::new();
    let b = Calendar::new();
    a.add_custom_holiday(date(2026, 6, 15), "a only");
    b.remove_holiday(date(2026, 1, 1));
    assert!(!b.is_holiday(date(2026, 6, 15)));
    assert!(a.is_holiday(date(2026, 1, 1)));
}

// ── Next / previous holiday ───────────────────────────────────────────────────

#[test]
fn next_holiday_is_strict() {
    let cal = Calendar::new();
    let next = cal.next_holiday(date(2026, 1, 1)).unwrap();
    assert_eq!(next.date(), date(2026, 1, 12));
    assert_eq!(next.name(), "成人の日");
    let prev = cal.previous_holiday(date(2026, 1, 12)).unwrap();
    assert_eq!(prev.date(), date(2026, 1, 1));
}

#[test]
fn next_holiday_sees_overlay() {
    let cal = Calendar::new();
    cal.add_custom_holiday(date(2026, 1, 5), "仕事始め休み");
    assert_eq!(
        cal.next_holiday(date(2026, 1, 1)).map(|h| h.date()),
        Some(date(2026, 1, 5))
    );
    cal.remove_holiday(date(2026, 1, 12));
    cal.remove_custom_holiday(date(2026, 1, 5));
    assert_eq!(
        cal.next_holiday(date(2026, 1, 1)).map(|h| h.date()),
        Some(date(2026, 2, 11))
    );
}

#[test]
fn search_past_dataset_edges() {
    let cal = Calendar::new();
    let last = Dataset::builtin().last_date().unwrap();
    let first = Dataset::builtin().first_date().unwrap();
    assert!(cal.next_holiday(last).is_none());
    assert!(cal.previous_holiday(first).is_none());

    cal.add_custom_holiday(date(2200, 6, 15), "far future");
    assert_eq!(
        cal.next_holiday(last).map(|h| h.date()),
        Some(date(2200, 6, 15))
    );
    cal.add_custom_holiday(date(1900, 6, 15), "far past");
    assert_eq!(
        cal.previous_holiday(first).map(|h| h.date()),
        Some(date(1900, 6, 15))
    );
}
