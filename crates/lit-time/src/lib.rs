//! # lit-time
//!
//! Calendar arithmetic for the liturgical calendar: a linear-day [`Date`],
//! Sunday-first [`Weekday`], [`Month`], year-less [`MonthDay`] keys, and the
//! Easter / Advent anchors from which every movable observance is derived.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and linear day-count helpers.
pub mod date;

/// Easter computus, Advent offset, Easter and Christmas points.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `MonthDay` — `MM-DD` keys for fixed-date tables.
pub mod month_day;

/// `Weekday` — day of the week, Sunday first.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{
    day_of_week, days_in_month, from_linear_day, is_leap_year, linear_from_ymd,
    sunday_week_of_linear, sunday_week_of_year, to_linear_day, week_start_linear,
    weekday_of_linear, ymd_from_linear, Date,
};
pub use easter::{
    advent_sunday_linear, advent_sunday_offset, christmas_point, christmas_point_of_linear,
    easter, easter_point, easter_point_of_linear, easter_sunday,
};
pub use month::Month;
pub use month_day::MonthDay;
pub use weekday::Weekday;
