//! `Lectionary` — indexed readings tables.
//!
//! A [`Lectionary`] holds three independent tables:
//!
//! | Table    | Key                               | Value                                   |
//! |----------|-----------------------------------|-----------------------------------------|
//! | Sunday   | week name, [`SundayCycle`]        | first, second, gospel, psalm            |
//! | Weekday  | reading key, weekday, [`WeekdayCycle`] | first, gospel                      |
//! | Fixed    | [`MonthDay`], [`WeekdayCycle`]    | first, gospel                           |
//!
//! [`Lectionary::builtin`] loads the shipped tables; [`Lectionary::new`]
//! starts empty so callers can supply their own data through the `insert_*`
//! methods.

use std::collections::{BTreeSet, HashMap};

use lit_time::{MonthDay, Weekday};

use crate::cycle::{SundayCycle, WeekdayCycle};
use crate::data::{
    FIXED_WEEKDAY_READINGS, ORDINARY_WEEKS, ORDINARY_WEEK_KEYS, SUNDAY_READINGS, WEEKDAY_READINGS,
};

/// Indexed Sunday, weekday and fixed-date readings.
#[derive(Debug, Clone, Default)]
pub struct Lectionary {
    sunday: HashMap<String, HashMap<SundayCycle, Vec<String>>>,
    weekday: HashMap<String, HashMap<(Weekday, WeekdayCycle), Vec<String>>>,
    fixed: HashMap<MonthDay, HashMap<WeekdayCycle, Vec<String>>>,
}

const BOTH_CYCLES: [WeekdayCycle; 2] = [WeekdayCycle::One, WeekdayCycle::Two];

fn owned(readings: &[&str]) -> Vec<String> {
    readings.iter().map(|r| r.to_string()).collect()
}

impl Lectionary {
    /// Create an empty lectionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lectionary loaded with the built-in tables.
    pub fn builtin() -> Self {
        let mut lect = Self::new();
        for p in SUNDAY_READINGS {
            lect.insert_sunday(p.week, SundayCycle::A, owned(&p.a));
            lect.insert_sunday(p.week, SundayCycle::B, owned(&p.b));
            lect.insert_sunday(p.week, SundayCycle::C, owned(&p.c));
        }
        // Seasonal entries are loaded last so they replace the ordinary week
        // on the days they share ("1 before Lent" from Ash Wednesday).
        for &(key, number) in ORDINARY_WEEK_KEYS {
            let Some(week) = ORDINARY_WEEKS.iter().find(|w| w.week == number) else {
                continue;
            };
            for day in Weekday::ALL {
                for cycle in BOTH_CYCLES {
                    if let Some(r) = week.readings(day, cycle) {
                        lect.insert_weekday(key, day, cycle, owned(&r));
                    }
                }
            }
        }
        for p in WEEKDAY_READINGS {
            let cycles = p.cycle.as_ref().map_or(&BOTH_CYCLES[..], std::slice::from_ref);
            for &cycle in cycles {
                lect.insert_weekday(p.key, p.day, cycle, owned(&p.readings));
            }
        }
        for p in FIXED_WEEKDAY_READINGS {
            let cycles = p.cycle.as_ref().map_or(&BOTH_CYCLES[..], std::slice::from_ref);
            for &cycle in cycles {
                lect.insert_fixed(p.date, cycle, owned(&p.readings));
            }
        }
        tracing::trace!(
            sundays = lect.sunday.len(),
            weekday_keys = lect.weekday.len(),
            fixed_dates = lect.fixed.len(),
            "loaded built-in lectionary"
        );
        lect
    }

    // ── Insertion ─────────────────────────────────────────────────────────────

    /// Register (or replace) the Sunday readings of `week` in `cycle`.
    pub fn insert_sunday(&mut self, week: &str, cycle: SundayCycle, readings: Vec<String>) {
        self.sunday
            .entry(week.to_string())
            .or_default()
            .insert(cycle, readings);
    }

    /// Register (or replace) the readings for `day` of the week keyed `key`.
    pub fn insert_weekday(
        &mut self,
        key: &str,
        day: Weekday,
        cycle: WeekdayCycle,
        readings: Vec<String>,
    ) {
        self.weekday
            .entry(key.to_string())
            .or_default()
            .insert((day, cycle), readings);
    }

    /// Register (or replace) the readings for a fixed calendar date.
    pub fn insert_fixed(&mut self, date: MonthDay, cycle: WeekdayCycle, readings: Vec<String>) {
        self.fixed.entry(date).or_default().insert(cycle, readings);
    }

    // ── Lookup ────────────────────────────────────────────────────────────────

    /// Sunday readings of `week` in `cycle`.
    pub fn sunday(&self, week: &str, cycle: SundayCycle) -> Option<&[String]> {
        self.sunday.get(week)?.get(&cycle).map(Vec::as_slice)
    }

    /// Weekday readings for `day` of the week keyed `key`.
    pub fn weekday(&self, key: &str, day: Weekday, cycle: WeekdayCycle) -> Option<&[String]> {
        self.weekday.get(key)?.get(&(day, cycle)).map(Vec::as_slice)
    }

    /// Readings tied to the calendar date `date`.
    pub fn fixed(&self, date: MonthDay, cycle: WeekdayCycle) -> Option<&[String]> {
        self.fixed.get(&date)?.get(&cycle).map(Vec::as_slice)
    }

    // ── Listings ──────────────────────────────────────────────────────────────

    /// Week names present in the Sunday table, sorted.
    pub fn sunday_weeks(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self.sunday.keys().map(String::as_str).collect();
        names.into_iter().collect()
    }

    /// Reading keys present in the weekday table, sorted.
    pub fn weekday_keys(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self.weekday.keys().map(String::as_str).collect();
        names.into_iter().collect()
    }

    /// Whether all three tables are empty.
    pub fn is_empty(&self) -> bool {
        self.sunday.is_empty() && self.weekday.is_empty() && self.fixed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_lectionary_finds_nothing() {
        let lect = Lectionary::new();
        assert!(lect.is_empty());
        assert!(lect.sunday("Advent 1", SundayCycle::A).is_none());
        assert!(lect.sunday_weeks().is_empty());
    }

    #[test]
    fn insert_and_lookup() {
        let mut lect = Lectionary::new();
        lect.insert_sunday("Proper 7", SundayCycle::C, readings(&["a", "b", "c", "d"]));
        lect.insert_weekday("Lent 1", Weekday::Monday, WeekdayCycle::One, readings(&["x", "y"]));
        lect.insert_fixed(MonthDay::new_unchecked(12, 30), WeekdayCycle::Two, readings(&["p", "q"]));

        assert_eq!(lect.sunday("Proper 7", SundayCycle::C).unwrap()[0], "a");
        assert!(lect.sunday("Proper 7", SundayCycle::A).is_none());
        assert_eq!(
            lect.weekday("Lent 1", Weekday::Monday, WeekdayCycle::One).unwrap(),
            &readings(&["x", "y"])[..]
        );
        assert!(lect.weekday("Lent 1", Weekday::Monday, WeekdayCycle::Two).is_none());
        assert!(lect.fixed(MonthDay::new_unchecked(12, 30), WeekdayCycle::Two).is_some());
        assert_eq!(lect.sunday_weeks(), vec!["Proper 7"]);
        assert_eq!(lect.weekday_keys(), vec!["Lent 1"]);
    }

    #[test]
    fn insert_replaces() {
        let mut lect = Lectionary::new();
        lect.insert_sunday("Trinity", SundayCycle::B, readings(&["old"]));
        lect.insert_sunday("Trinity", SundayCycle::B, readings(&["new"]));
        assert_eq!(lect.sunday("Trinity", SundayCycle::B).unwrap(), &readings(&["new"])[..]);
    }

    #[test]
    fn builtin_tables() {
        let lect = Lectionary::builtin();
        assert_eq!(lect.sunday_weeks().len(), 58);
        assert!(lect.weekday_keys().contains(&"Holy Week"));
        // Shared weekday readings are registered for both cycles
        let one = lect.weekday("Lent 3", Weekday::Friday, WeekdayCycle::One);
        let two = lect.weekday("Lent 3", Weekday::Friday, WeekdayCycle::Two);
        assert!(one.is_some());
        assert_eq!(one, two);
        // Ordinary weeks alternate their first reading and share the gospel
        let one = lect.weekday("Epiphany 2", Weekday::Monday, WeekdayCycle::One).unwrap();
        let two = lect.weekday("Epiphany 2", Weekday::Monday, WeekdayCycle::Two).unwrap();
        assert_ne!(one[0], two[0]);
        assert_eq!(one[1], two[1]);
    }

    #[test]
    fn every_ordinary_key_has_a_full_week() {
        let lect = Lectionary::builtin();
        for &(key, _) in ORDINARY_WEEK_KEYS {
            for day in &Weekday::ALL[1..] {
                for cycle in BOTH_CYCLES {
                    let r = lect.weekday(key, *day, cycle).unwrap();
                    assert_eq!(r.len(), 2, "{key} {day:?} {cycle}");
                }
            }
            assert!(lect.weekday(key, Weekday::Sunday, WeekdayCycle::One).is_none());
        }
    }

    #[test]
    fn ash_wednesday_replaces_the_ordinary_week() {
        let lect = Lectionary::builtin();
        let monday = lect.weekday("1 before Lent", Weekday::Monday, WeekdayCycle::Two).unwrap();
        assert_eq!(monday, ["Tobit 1:3,2:1a-8", "Mark 12:1-12"]);
        let wednesday = lect
            .weekday("1 before Lent", Weekday::Wednesday, WeekdayCycle::Two)
            .unwrap();
        assert_eq!(wednesday, ["Joel 2:1-2,12-17", "Matthew 6:1-6,16-21"]);
    }

    #[test]
    fn ordinary_weeks_are_numbered_in_order() {
        for (i, week) in ORDINARY_WEEKS.iter().enumerate() {
            assert_eq!(week.week as usize, i + 1);
        }
        assert_eq!(ORDINARY_WEEKS.len(), 34);
        assert!(ORDINARY_WEEK_KEYS.iter().all(|&(_, n)| (1..=34).contains(&n)));
    }

    #[test]
    fn builtin_sunday_lists_are_complete() {
        let lect = Lectionary::builtin();
        for week in lect.sunday_weeks() {
            for cycle in SundayCycle::ALL {
                let r = lect.sunday(week, cycle).unwrap();
                assert_eq!(r.len(), 4, "{week} {cycle}");
                assert!(r.iter().all(|s| !s.is_empty()), "{week} {cycle}");
            }
        }
    }
}
