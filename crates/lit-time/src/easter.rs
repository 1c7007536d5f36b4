//! Easter and Advent anchors.
//!
//! The movable calendar hangs off two points per year: Easter Sunday and
//! Christmas Day.  Advent Sunday is expressed as a (negative) offset from
//! Christmas Day so it can be compared directly with a date's Christmas
//! point.

use crate::date::{linear_from_ymd, weekday_of_linear, ymd_from_linear, Date};
use lit_core::errors::Result;

/// Month and day of Easter Sunday in the given year.
///
/// Uses the Anonymous Gregorian (Meeus/Jones/Butcher) algorithm, valid for
/// every Gregorian year.
pub fn easter(year: i32) -> (u8, u8) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;
    (month as u8, day as u8)
}

/// Easter Sunday of `year` as a [`Date`].
pub fn easter_sunday(year: i32) -> Result<Date> {
    let (m, d) = easter(year);
    Date::from_ymd(year, m, d)
}

/// Linear day index of Easter Sunday, valid for any year.
pub(crate) fn easter_linear(year: i32) -> i32 {
    let (m, d) = easter(year);
    linear_from_ymd(year, m, d)
}

/// Offset of Advent Sunday from Christmas Day of the same year.
///
/// Always in `-27..=-21`: Advent Sunday falls three weeks plus the weekday
/// number of Christmas Day before Christmas.
pub fn advent_sunday_offset(year: i32) -> i32 {
    let christmas = linear_from_ymd(year, 12, 25);
    -(i32::from(weekday_of_linear(christmas).number()) + 21)
}

/// Linear day index of Advent Sunday in `year`, valid for any year.
pub fn advent_sunday_linear(year: i32) -> i32 {
    linear_from_ymd(year, 12, 25) + advent_sunday_offset(year)
}

/// Number of days from Easter Sunday of the date's own year to the date.
///
/// Negative before Easter.
pub fn easter_point(date: Date) -> i32 {
    easter_point_of_linear(date.linear())
}

/// [`easter_point`] of a raw linear day index, valid for any year.
pub fn easter_point_of_linear(index: i32) -> i32 {
    let (year, _, _) = ymd_from_linear(index);
    index - easter_linear(year)
}

/// Number of days from the governing Christmas Day to the date.
///
/// For January and February the governing Christmas is that of the previous
/// year; for every other month it is the same year's.
pub fn christmas_point(date: Date) -> i32 {
    christmas_point_of_linear(date.linear())
}

/// [`christmas_point`] of a raw linear day index, valid for any year.
pub fn christmas_point_of_linear(index: i32) -> i32 {
    let (year, month, _) = ymd_from_linear(index);
    let christmas_year = if month <= 2 { year - 1 } else { year };
    index - linear_from_ymd(christmas_year, 12, 25)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_known_years() {
        assert_eq!(easter(2024), (3, 31));
        assert_eq!(easter(2025), (4, 20));
        assert_eq!(easter(2026), (4, 5));
        assert_eq!(easter(2038), (4, 25)); // latest possible
        assert_eq!(easter(2285), (3, 22)); // earliest possible
    }

    #[test]
    fn easter_is_a_sunday() {
        for y in 1583..=2400 {
            assert!(easter_sunday(y).unwrap().weekday().is_sunday(), "{y}");
        }
    }

    #[test]
    fn advent_offset_range() {
        for y in 1900..=2100 {
            let off = advent_sunday_offset(y);
            assert!((-27..=-21).contains(&off), "{y}: {off}");
        }
        // Christmas 2025 is a Thursday: Advent Sunday 30 November
        assert_eq!(advent_sunday_offset(2025), -25);
        assert_eq!(date(2025, 12, 25).add_days(-25).unwrap(), date(2025, 11, 30));
    }

    #[test]
    fn points() {
        assert_eq!(easter_point(date(2025, 4, 20)), 0);
        assert_eq!(easter_point(date(2025, 3, 5)), -46); // Ash Wednesday
        assert_eq!(christmas_point(date(2025, 12, 25)), 0);
        assert_eq!(christmas_point(date(2026, 1, 6)), 12);
        assert_eq!(christmas_point(date(2025, 11, 30)), -25);
        // January of year 1 looks back to Christmas of year 0
        assert_eq!(christmas_point(Date::MIN), 7);
        // 31 December of year 0, before the first representable date
        assert_eq!(christmas_point_of_linear(-1), 6);
        assert_eq!(easter(0), (4, 9));
        assert_eq!(easter_point_of_linear(-1), 266);
    }
}
