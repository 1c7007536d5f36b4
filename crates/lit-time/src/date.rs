//! `Date` type and linear day-count arithmetic.
//!
//! Dates are proleptic Gregorian and represented as a **linear day index**:
//! the number of days since January 1 of year 1.  Offsets such as "46 days
//! before Easter" are plain integer subtraction on that index.
//!
//! # Index convention
//! * Index 0 = 0001-01-01 (a Monday).
//! * The valid date range is 0001-01-01 to 9999-12-31.
//! * The conversion helpers accept any year for intermediate arithmetic
//!   (e.g. "Christmas of the previous year"), but a [`Date`] value is always
//!   inside the valid range.

use std::str::FromStr;

use crate::month::Month;
use crate::month_day::MonthDay;
use crate::weekday::Weekday;
use lit_core::errors::{Error, Result};

/// A calendar date represented as a linear day index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1.
    pub const MIN: Date = Date(0);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_058);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a linear day index.
    pub fn from_linear(index: i32) -> Result<Self> {
        let d = Date(index);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "linear day {index} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        let Some(m) = Month::from_number(month) else {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        };
        let days_in = m.days(is_leap_year(year));
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(linear_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the linear day index.
    pub fn linear(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_linear(self.0)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the month and day, e.g. `12-25`.
    pub fn month_day(&self) -> MonthDay {
        let (_, m, d) = self.ymd();
        MonthDay::new_unchecked(m, d)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        weekday_of_linear(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow adding {n} days")))
            .and_then(Date::from_linear)
    }

    /// Advance by `n` days, returning `None` if the result is out of range.
    pub fn checked_add_days(self, n: i32) -> Option<Self> {
        self.add_days(n).ok()
    }

    /// Return the Sunday on or before this date (the Sunday that opens its
    /// week).  Fails for 0001-01-01 to 0001-01-06, whose Sunday is in year 0;
    /// [`week_start_linear`] has no such limit.
    pub fn week_start_sunday(self) -> Result<Self> {
        self.add_days(-i32::from(self.weekday().number()))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing and display ───────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse a `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [y, m, d] = parts.as_slice() else {
            return Err(Error::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        let digits = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
        if y.len() != 4 || m.len() != 2 || d.len() != 2 || !(digits(y) && digits(m) && digits(d)) {
            return Err(Error::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        }
        let field = |text: &str, what: &str| {
            text.parse::<u16>()
                .map_err(|_| Error::Parse(format!("invalid {what} {text:?} in {s:?}")))
        };
        let year = field(y, "year")?;
        let month = field(m, "month")?;
        let day = field(d, "day")?;
        Date::from_ymd(i32::from(year), month as u8, day as u8)
    }
}

impl TryFrom<String> for Date {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Date> for String {
    fn from(d: Date) -> String {
        d.to_string()
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> Result<u8> {
    let Some(m) = Month::from_number(month) else {
        return Err(Error::Date(format!("month {month} out of range [1, 12]")));
    };
    Ok(m.days(is_leap_year(year)))
}

/// Convert `(year, month, day)` to a linear day index (0 = 0001-01-01).
pub fn to_linear_day(year: i32, month: u8, day: u8) -> Result<i32> {
    Date::from_ymd(year, month, day).map(|d| d.linear())
}

/// Convert a linear day index back to `(year, month, day)`.
pub fn from_linear_day(index: i32) -> Result<(i32, u8, u8)> {
    Date::from_linear(index).map(|d| d.ymd())
}

/// Day of the week in the range 0–6, where 0 is Sunday.
pub fn day_of_week(date: Date) -> u8 {
    date.weekday().number()
}

/// Week number of the year for weeks that start on Sunday.
///
/// Week 1 begins on the first Sunday of the year; days before that Sunday
/// belong to week 0.
pub fn sunday_week_of_year(date: Date) -> i32 {
    sunday_week_of_linear(date.linear())
}

// ── Unchecked linear-day arithmetic ───────────────────────────────────────────
//
// These work on raw indices of the proleptic Gregorian calendar, so they also
// cover the days of year 0 that open the first week of year 1.

/// Week number of the year of a linear day index; see [`sunday_week_of_year`].
pub fn sunday_week_of_linear(index: i32) -> i32 {
    let (year, _, _) = ymd_from_linear(index);
    let jan1 = linear_from_ymd(year, 1, 1);
    let to_sunday = (7 - i32::from(weekday_of_linear(jan1).number())) % 7;
    let first_sunday = jan1 + to_sunday;
    (index - first_sunday).div_euclid(7) + 1
}

/// Linear day index of the Sunday on or before `date`.
///
/// Unlike [`Date::week_start_sunday`] this never fails: the result is −1
/// (31 December of year 0) for the first six days of year 1.
pub fn week_start_linear(date: Date) -> i32 {
    date.linear() - i32::from(date.weekday().number())
}

/// Linear day index of `(year, month, day)` without range checks.
///
/// Valid for any year, including years before 1 (negative result).  The
/// caller guarantees that `month` and `day` form a real calendar day.
pub fn linear_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    debug_assert!((1..=12).contains(&month));
    let y = year - 1;
    let mut n = y * 365 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);
    n += i32::from(MONTH_OFFSET[month as usize - 1]);
    if month > 2 && is_leap_year(year) {
        n += 1;
    }
    n + i32::from(day) - 1
}

/// Weekday of a linear day index (index 0 is a Monday).
pub fn weekday_of_linear(index: i32) -> Weekday {
    let n = (index + 1).rem_euclid(7) as u8;
    match Weekday::from_number(n) {
        Some(w) => w,
        None => unreachable!("rem_euclid(7) is always in 0..7"),
    }
}

/// Decompose a linear day index into `(year, month, day)`, for any index.
pub fn ymd_from_linear(index: i32) -> (i32, u8, u8) {
    // Estimate the year from the mean Gregorian year length, then adjust.
    let mut y = (i64::from(index) * 400 / 146_097) as i32 + 1;
    loop {
        if index < linear_from_ymd(y, 1, 1) {
            y -= 1;
        } else if index >= linear_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = index - linear_from_ymd(y, 1, 1) + 1; // 1-based day of year
    let leap = is_leap_year(y);
    let mut m = 1u8;
    loop {
        let days = match Month::from_number(m) {
            Some(month) => i32::from(month.days(leap)),
            None => unreachable!("day of year never exceeds December"),
        };
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        let (y, m, day) = d.ymd();
        match chrono::NaiveDate::from_ymd_opt(y, u32::from(m), u32::from(day)) {
            Some(nd) => nd,
            None => unreachable!("every Date lies inside chrono's range"),
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;
    fn try_from(nd: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(nd.year(), nd.month() as u8, nd.day() as u8)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
