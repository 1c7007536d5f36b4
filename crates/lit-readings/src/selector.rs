//! `ReadingsSelector` — picks the readings for a date.
//!
//! Tiers are tried in order and the first hit wins:
//!
//! 1. **Sunday**: the week name in the Sunday table for the year's
//!    [`SundayCycle`](crate::SundayCycle).
//! 2. **Weekday**: the weekday reading key, if present, in the weekday table
//!    for the year's [`WeekdayCycle`](crate::WeekdayCycle).
//! 3. **Fixed**: the date's `MM-DD` in the fixed-date table.
//!
//! When no tier matches the result is empty.  Feast readings are layered on
//! top of this by the caller.

use lit_time::Date;

use crate::cycle::LectionaryCycle;
use crate::lectionary::Lectionary;

/// Which tier produced a set of readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingsSource {
    /// Sunday table, by week name.
    Sunday,
    /// Weekday table, by weekday reading key.
    Weekday,
    /// Fixed-date table, by month and day.
    Fixed,
}

/// Selects readings from a [`Lectionary`].
#[derive(Debug, Clone)]
pub struct ReadingsSelector {
    lectionary: Lectionary,
}

impl Default for ReadingsSelector {
    fn default() -> Self {
        Self::new(Lectionary::builtin())
    }
}

impl ReadingsSelector {
    /// Create a selector over `lectionary`.
    pub fn new(lectionary: Lectionary) -> Self {
        Self { lectionary }
    }

    /// The underlying lectionary.
    pub fn lectionary(&self) -> &Lectionary {
        &self.lectionary
    }

    /// Readings for `date`, given the week name and the weekday reading key
    /// of its week.  Returns an empty list when no tier matches.
    pub fn select(&self, date: Date, week_name: &str, weekday_key: Option<&str>) -> Vec<String> {
        match self.lookup(date, week_name, weekday_key) {
            Some((source, readings)) => {
                tracing::trace!(%date, ?source, "selected readings");
                readings.to_vec()
            }
            None => {
                tracing::trace!(%date, week_name, ?weekday_key, "no readings");
                Vec::new()
            }
        }
    }

    /// Like [`select`](Self::select) but also reports the tier that matched.
    pub fn lookup(
        &self,
        date: Date,
        week_name: &str,
        weekday_key: Option<&str>,
    ) -> Option<(ReadingsSource, &[String])> {
        let cycle = LectionaryCycle::for_year(date.year());
        let weekday = date.weekday();

        if weekday.is_sunday() {
            if let Some(r) = self.lectionary.sunday(week_name, cycle.sunday) {
                return Some((ReadingsSource::Sunday, r));
            }
        } else if let Some(key) = weekday_key {
            if let Some(r) = self.lectionary.weekday(key, weekday, cycle.weekday) {
                if !r.is_empty() {
                    return Some((ReadingsSource::Weekday, r));
                }
            }
        }

        self.lectionary
            .fixed(date.month_day(), cycle.weekday)
            .map(|r| (ReadingsSource::Fixed, r))
    }
}
