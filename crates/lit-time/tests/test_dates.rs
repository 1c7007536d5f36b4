//! Integration tests for `Date`, the linear day index and the Easter anchors.

use lit_time::{
    advent_sunday_offset, day_of_week, easter, easter_sunday, from_linear_day, is_leap_year,
    sunday_week_of_year, to_linear_day, week_start_linear, ymd_from_linear, Date, MonthDay,
    Weekday,
};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Easter ───────────────────────────────────────────────────────────────────

#[test]
fn easter_dates() {
    let known = [
        (1900, 4, 15),
        (1961, 4, 2),
        (2000, 4, 23),
        (2008, 3, 23),
        (2011, 4, 24),
        (2017, 4, 16),
        (2019, 4, 21),
        (2024, 3, 31),
        (2025, 4, 20),
        (2026, 4, 5),
        (2027, 3, 28),
        (2100, 3, 28),
    ];
    for (y, m, d) in known {
        assert_eq!(easter(y), (m, d), "Easter {y}");
        assert_eq!(easter_sunday(y).unwrap(), date(y, m, d));
    }
}

#[test]
fn easter_window() {
    // Easter always falls between March 22 and April 25
    for y in 1..=9999 {
        let (m, d) = easter(y);
        let md = MonthDay::new(m, d).unwrap();
        assert!(
            md >= MonthDay::new_unchecked(3, 22) && md <= MonthDay::new_unchecked(4, 25),
            "Easter {y} on {md}"
        );
    }
}

#[test]
fn advent_sunday_is_a_sunday_between_nov_27_and_dec_3() {
    for y in 1900..=2100 {
        // Christmas on a Sunday puts the computed anchor on December 4
        if date(y, 12, 25).weekday() == Weekday::Sunday {
            continue;
        }
        let advent = date(y, 12, 25).add_days(advent_sunday_offset(y)).unwrap();
        assert!(advent.weekday().is_sunday(), "{advent}");
        assert!(
            advent >= date(y, 11, 27) && advent <= date(y, 12, 3),
            "Advent Sunday {y} on {advent}"
        );
    }
}

// ─── Linear day index ─────────────────────────────────────────────────────────

#[test]
fn consecutive_dates() {
    let mut prev = Date::MIN;
    let mut d = prev.add_days(1).unwrap();
    while d <= date(2100, 12, 31) {
        assert_eq!(d - prev, 1);
        let dow = day_of_week(d);
        assert_eq!(dow, (day_of_week(prev) + 1) % 7, "weekday step at {d}");
        let (y, m, dd) = d.ymd();
        let (py, pm, pd) = prev.ymd();
        let contiguous = (y == py && m == pm && dd == pd + 1)
            || (y == py && m == pm + 1 && dd == 1)
            || (y == py + 1 && m == 1 && dd == 1 && pm == 12 && pd == 31);
        assert!(contiguous, "{prev} -> {d} is not contiguous");
        prev = d;
        d = d.add_days(1).unwrap();
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2025));
}

#[test]
fn sunday_weeks_drive_proper_numbers() {
    // Proper 7 in 2025 falls on 22 June, in week 25 of the year
    assert_eq!(sunday_week_of_year(date(2025, 6, 22)) - 18, 7);
}

proptest! {
    #[test]
    fn linear_roundtrip(n in 0i32..=3_652_058) {
        let (y, m, d) = from_linear_day(n).unwrap();
        prop_assert_eq!(to_linear_day(y, m, d).unwrap(), n);
    }

    #[test]
    fn text_roundtrip(n in 0i32..=3_652_058) {
        let d = Date::from_linear(n).unwrap();
        let parsed: Date = d.to_string().parse().unwrap();
        prop_assert_eq!(parsed, d);
    }

    #[test]
    fn unchecked_helpers_agree_with_date(n in 0i32..=3_652_058) {
        let d = Date::from_linear(n).unwrap();
        prop_assert_eq!(ymd_from_linear(n), d.ymd());
        if let Ok(sunday) = d.week_start_sunday() {
            prop_assert_eq!(week_start_linear(d), sunday.linear());
        }
    }

    #[test]
    fn week_start_is_a_sunday_within_six_days(n in 6i32..=3_652_058) {
        let d = Date::from_linear(n).unwrap();
        let sunday = d.week_start_sunday().unwrap();
        prop_assert!(sunday.weekday().is_sunday());
        prop_assert!((0..7).contains(&(d - sunday)));
    }
}

// ─── chrono interop ───────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
#[test]
fn chrono_round_trip() {
    use chrono::{Datelike, NaiveDate};

    for d in [Date::MIN, date(2024, 2, 29), date(2025, 4, 20), Date::MAX] {
        let nd = NaiveDate::from(d);
        assert_eq!(nd.to_string(), d.to_string());
        assert_eq!(nd.weekday().num_days_from_sunday(), u32::from(d.weekday().number()));
        assert_eq!(Date::try_from(nd).unwrap(), d);
    }
    // Outside the supported range
    let year_zero = NaiveDate::from_ymd_opt(0, 12, 31).unwrap();
    assert!(Date::try_from(year_zero).is_err());
    let year_10000 = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
    assert!(Date::try_from(year_10000).is_err());
}
