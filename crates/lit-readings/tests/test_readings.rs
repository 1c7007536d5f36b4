//! Integration tests for the built-in lectionary and the readings selector.

use lit_readings::{LectionaryCycle, ReadingsSelector, ReadingsSource, SundayCycle, WeekdayCycle};
use lit_time::Date;
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Sunday tier ──────────────────────────────────────────────────────────────

#[test]
fn proper_7_year_c() {
    let sel = ReadingsSelector::default();
    let r = sel.select(date(2025, 6, 22), "Proper 7", Some("Trinity 2"));
    assert_eq!(
        r,
        vec!["1 Kings 19:1-15a", "Galatians 3:23-29", "Luke 8:26-39", "Psalm 42"]
    );
}

#[test]
fn palm_sunday_is_keyed_as_holy_week() {
    let sel = ReadingsSelector::default();
    // 2024 is year B
    let r = sel.select(date(2024, 3, 24), "Holy Week", Some("Holy Week"));
    assert_eq!(r[2], "Mark 14:1-15:47");
}

#[test]
fn advent_sunday_year_a() {
    let sel = ReadingsSelector::default();
    // 2022 is year C by the calendar-year rule
    assert_eq!(LectionaryCycle::for_year(2022).sunday, SundayCycle::C);
    let r = sel.select(date(2023, 12, 3), "Advent 1", Some("Advent 1"));
    assert_eq!(r[2], "Matthew 24:36-44");
}

// ─── Weekday tier ─────────────────────────────────────────────────────────────

#[test]
fn weekday_in_advent() {
    let sel = ReadingsSelector::default();
    let (src, r) = sel
        .lookup(date(2024, 12, 2), "Advent 1", Some("Advent 1"))
        .unwrap();
    assert_eq!(src, ReadingsSource::Weekday);
    assert_eq!(r, ["Isaiah 2:1-5", "Matthew 8:5-11"]);
}

#[test]
fn epiphany_2_alternates_by_year() {
    let sel = ReadingsSelector::default();
    assert_eq!(LectionaryCycle::for_year(2024).weekday, WeekdayCycle::One);
    let even = sel.select(date(2024, 1, 15), "Epiphany 2", Some("Epiphany 2"));
    let odd = sel.select(date(2025, 1, 20), "Epiphany 2", Some("Epiphany 2"));
    assert_eq!(even[0], "1 Samuel 15:16-23");
    assert_eq!(odd[0], "Hebrews 5:1-10");
    assert_eq!(even[1], odd[1]);
}

#[test]
fn every_pre_lent_weekday_answers() {
    let sel = ReadingsSelector::default();
    // Monday to Saturday in an even and an odd year
    for monday in [date(2024, 2, 5), date(2025, 2, 3)] {
        for n in 1..=5 {
            let key = format!("{n} before Lent");
            for offset in 0..6 {
                let d = monday.add_days(offset).unwrap();
                let (src, r) = sel.lookup(d, &key, Some(key.as_str())).unwrap();
                assert_eq!(src, ReadingsSource::Weekday, "{d} {key}");
                assert_eq!(r.len(), 2, "{d} {key}");
            }
        }
    }
}

#[test]
fn trinity_weekday() {
    let sel = ReadingsSelector::default();
    let (src, r) = sel
        .lookup(date(2025, 6, 23), "Trinity 2", Some("Trinity 2"))
        .unwrap();
    assert_eq!(src, ReadingsSource::Weekday);
    assert_eq!(r, ["Ecclesiasticus 17:20-24", "Mark 10:17-27"]);
    // The year before reads the other cycle with the same gospel
    let even = sel.select(date(2024, 6, 3), "Trinity 2", Some("Trinity 2"));
    assert_eq!(even, vec!["1 Peter 1:3-9", "Mark 10:17-27"]);
}

#[test]
fn before_advent_ends_on_the_last_week() {
    let sel = ReadingsSelector::default();
    let r = sel.select(date(2025, 11, 29), "1 before Advent", Some("1 before Advent"));
    assert_eq!(r, vec!["Daniel 7:15-27", "Luke 21:34-36"]);
}

#[test]
fn eastertide_weekday() {
    let sel = ReadingsSelector::default();
    let r = sel.select(date(2025, 5, 12), "Easter 4", Some("Easter 4"));
    assert_eq!(r, vec!["Acts 11:1-18", "John 10:1-10"]);
}

#[test]
fn week_name_is_not_a_weekday_key() {
    let sel = ReadingsSelector::default();
    assert!(sel
        .select(date(2025, 6, 23), "Proper 7", Some("Proper 7"))
        .is_empty());
}

// ─── Fixed tier ───────────────────────────────────────────────────────────────

#[test]
fn fixed_weekday_readings() {
    let sel = ReadingsSelector::default();
    let (src, r) = sel.lookup(date(2024, 12, 30), "Christmas 1", None).unwrap();
    assert_eq!(src, ReadingsSource::Fixed);
    assert_eq!(r, ["1 John 2:12-17", "Luke 2:36-40"]);
}

#[test]
fn late_advent_weekday_prefers_the_week_key() {
    // 18 December 2025 is a Thursday of Advent 3; the week table answers first
    let sel = ReadingsSelector::default();
    let (src, _) = sel
        .lookup(date(2025, 12, 18), "Advent 3", Some("Advent 3"))
        .unwrap();
    assert_eq!(src, ReadingsSource::Weekday);
    // Without a key the fixed table is used
    let (src, r) = sel.lookup(date(2025, 12, 18), "Advent 3", None).unwrap();
    assert_eq!(src, ReadingsSource::Fixed);
    assert_eq!(r[1], "Matthew 1:18-24");
}

proptest! {
    #[test]
    fn every_sunday_week_resolves_in_every_cycle(year in 1900i32..=2100, idx in 0usize..58) {
        let sel = ReadingsSelector::default();
        let weeks = sel.lectionary().sunday_weeks();
        let week = weeks[idx % weeks.len()];
        // first Sunday of December in `year`
        let mut d = date(year, 12, 1);
        while !d.weekday().is_sunday() {
            d = d.add_days(1).unwrap();
        }
        let r = sel.select(d, week, None);
        prop_assert_eq!(r.len(), 4);
    }
}
