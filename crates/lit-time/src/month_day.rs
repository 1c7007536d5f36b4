//! `MonthDay` — a year-less calendar key such as `12-25`.

use std::str::FromStr;

use crate::month::Month;
use lit_core::errors::{Error, Result};

/// A month and day without a year, used to key fixed-date feasts and
/// readings.  February 29 is a valid key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Create a key, validating the day against the longest form of the month.
    pub fn new(month: u8, day: u8) -> Result<Self> {
        let Some(m) = Month::from_number(month) else {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        };
        let max = m.days(true);
        if day == 0 || day > max {
            return Err(Error::Date(format!("day {day} out of range [1, {max}] for {m}")));
        }
        Ok(MonthDay { month, day })
    }

    /// Create a key without checking the day, for static tables.
    ///
    /// # Panics
    /// If `month` is not in `1..=12`; in a `static` initialiser this is a
    /// compile error.
    pub const fn new_unchecked(month: u8, day: u8) -> Self {
        assert!(month >= 1 && month <= 12, "month out of range");
        MonthDay { month, day }
    }

    /// The month.
    pub fn month(&self) -> Month {
        match Month::from_number(self.month) {
            Some(m) => m,
            None => unreachable!("MonthDay always holds a valid month"),
        }
    }

    /// The 1-based month number.
    pub fn month_number(&self) -> u8 {
        self.month
    }

    /// The day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    /// Parse an `MM-DD` key.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Parse(format!("expected MM-DD, got {s:?}"));
        let (m, d) = s.trim().split_once('-').ok_or_else(bad)?;
        if m.len() != 2 || d.len() != 2 || !m.bytes().chain(d.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let month = m.parse::<u8>().map_err(|_| bad())?;
        let day = d.parse::<u8>().map_err(|_| bad())?;
        MonthDay::new(month, day)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<MonthDay> for String {
    fn from(md: MonthDay) -> String {
        md.to_string()
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl std::fmt::Debug for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MonthDay({self})")
    }
}
