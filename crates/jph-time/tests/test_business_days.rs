//! Integration tests for business-day predicates, searches, and counts.

use chrono::{Days, NaiveDate};
use jph_time::{Calendar, BUSINESS_DAY_SEARCH_LIMIT};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn saturday_is_not_a_business_day() {
    let cal = Calendar::new();
    assert!(cal.is_weekend(date(2026, 6, 6)));
    assert!(!cal.is_business_day(date(2026, 6, 6)));
    assert!(cal.is_business_day(date(2026, 6, 8)));
}

#[test]
fn next_business_day_after_weekend() {
    let cal = Calendar::new();
    assert_eq!(cal.next_business_day(date(2026, 6, 6)), Some(date(2026, 6, 8)));
    assert_eq!(cal.previous_business_day(date(2026, 6, 7)), Some(date(2026, 6, 5)));
}

#[test]
fn business_day_is_its_own_neighbour() {
    let cal = Calendar::new();
    let day = date(2026, 6, 10);
    assert_eq!(cal.next_business_day(day), Some(day));
    assert_eq!(cal.previous_business_day(day), Some(day));
}

#[test]
fn search_crosses_holiday_blocks() {
    let cal = Calendar::new();
    // 2026 Silver Week: 9/19 Sat .. 9/23 Wed
    assert_eq!(cal.next_business_day(date(2026, 9, 19)), Some(date(2026, 9, 24)));
    assert_eq!(cal.previous_business_day(date(2026, 9, 23)), Some(date(2026, 9, 18)));
}

#[test]
fn custom_holidays_block_the_search() {
    let cal = Calendar::new();
    cal.add_custom_holiday(date(2026, 6, 8), "臨時休業");
    assert_eq!(cal.next_business_day(date(2026, 6, 6)), Some(date(2026, 6, 9)));
}

#[test]
fn full_year_of_custom_holidays_exhausts_search() {
    let cal = Calendar::new();
    let start = date(2026, 1, 1);
    for i in 0..u64::from(BUSINESS_DAY_SEARCH_LIMIT) {
        cal.add_custom_holiday(start + Days::new(i), "連休");
    }
    assert_eq!(cal.next_business_day(start), None);
    let last = start + Days::new(u64::from(BUSINESS_DAY_SEARCH_LIMIT) - 1);
    assert_eq!(cal.previous_business_day(last), None);
    // The block ends on 2027-01-01 (Fri); the next working day is Monday.
    assert_eq!(last, date(2027, 1, 1));
    assert_eq!(cal.next_business_day(last + Days::new(1)), Some(date(2027, 1, 4)));
}

#[test]
fn golden_week_count() {
    let cal = Calendar::new();
    // 4/30 (Thu) and 5/1 (Fri) are the only working days.
    assert_eq!(cal.business_days_between(date(2026, 4, 29), date(2026, 5, 6)), 2);
}

#[test]
fn reversed_and_single_day_counts() {
    let cal = Calendar::new();
    assert_eq!(cal.business_days_between(date(2026, 5, 6), date(2026, 4, 29)), 0);
    assert_eq!(cal.business_days_between(date(2026, 6, 8), date(2026, 6, 8)), 1);
    assert_eq!(cal.business_days_between(date(2026, 6, 6), date(2026, 6, 6)), 0);
}

#[test]
fn yearly_count_2026() {
    let cal = Calendar::new();
    // 365 days, 104 of them Saturday or Sunday
    let weekday_holidays = cal
        .holidays_in_year(2026)
        .iter()
        .filter(|h| !cal.is_weekend(h.date()))
        .count() as u32;
    assert_eq!(
        cal.business_days_between(date(2026, 1, 1), date(2026, 12, 31)),
        365 - 104 - weekday_holidays
    );
}
