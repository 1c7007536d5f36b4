//! Built-in lectionary tables.
//!
//! Sunday propers follow the Revised Common Lectionary (with Common Worship
//! names for the Sundays before Lent and before Advent).  Weekdays read from
//! the seasonal table in Advent, Lent and Eastertide, from the numbered
//! ordinary weeks otherwise, and from the fixed-date table around Christmas.

use lit_time::{MonthDay, Weekday};

use crate::cycle::WeekdayCycle;

mod fixed;
mod ordinary;
mod sunday;
mod weekday;

pub use fixed::FIXED_WEEKDAY_READINGS;
pub use ordinary::{ORDINARY_WEEKS, ORDINARY_WEEK_KEYS};
pub use sunday::SUNDAY_READINGS;
pub use weekday::WEEKDAY_READINGS;

/// Sunday propers for one week, per cycle.
///
/// Each list is `[first reading, second reading, gospel, psalm]`.
#[derive(Debug, Clone, Copy)]
pub struct SundayPropers {
    /// Week name, e.g. `"Advent 1"` or `"Proper 7"`.
    pub week: &'static str,
    /// Year A.
    pub a: [&'static str; 4],
    /// Year B.
    pub b: [&'static str; 4],
    /// Year C.
    pub c: [&'static str; 4],
}

/// Readings for one weekday of a named week.
///
/// Each list is `[first reading, gospel]`.
#[derive(Debug, Clone, Copy)]
pub struct WeekdayPropers {
    /// Weekday reading key, e.g. `"Lent 3"`.
    pub key: &'static str,
    /// Day of the week.
    pub day: Weekday,
    /// Cycle the readings belong to; `None` when both cycles share them.
    pub cycle: Option<WeekdayCycle>,
    /// The readings.
    pub readings: [&'static str; 2],
}

/// One numbered week of the ordinary weekday lectionary.
///
/// `days[0]` is Monday; each day is `[cycle 1 first reading, cycle 2 first
/// reading, gospel]`.
#[derive(Debug, Clone, Copy)]
pub struct OrdinaryWeek {
    /// Week number, 1 to 34.
    pub week: u8,
    /// Monday to Saturday.
    pub days: [[&'static str; 3]; 6],
}

impl OrdinaryWeek {
    /// `[first reading, gospel]` for `day` in `cycle`, or `None` on Sunday.
    pub fn readings(&self, day: Weekday, cycle: WeekdayCycle) -> Option<[&'static str; 2]> {
        let [one, two, gospel] = *self.days.get(day.number().checked_sub(1)? as usize)?;
        Some(match cycle {
            WeekdayCycle::One => [one, gospel],
            WeekdayCycle::Two => [two, gospel],
        })
    }
}

/// Readings for a fixed calendar date, independent of the week.
#[derive(Debug, Clone, Copy)]
pub struct FixedPropers {
    /// Month and day.
    pub date: MonthDay,
    /// Cycle the readings belong to; `None` when both cycles share them.
    pub cycle: Option<WeekdayCycle>,
    /// `[first reading, gospel]`.
    pub readings: [&'static str; 2],
}
