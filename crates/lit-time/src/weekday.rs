//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 0–6 with **Sunday = 0**.  Week-start arithmetic in
/// the calendar always counts back to the Sunday that opens a week, so the
/// Sunday-first numbering is used everywhere instead of the ISO Monday-first
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in Sunday-first order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from the Sunday-first number (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Return the Sunday-first number (0 = Sunday … 6 = Saturday).
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return `true` for Sunday.
    pub fn is_sunday(&self) -> bool {
        *self == Weekday::Sunday
    }

    /// Return the English name (`"Sunday"`, `"Monday"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 0..7u8 {
            let w = Weekday::from_number(n).unwrap();
            assert_eq!(w.number(), n);
        }
        assert!(Weekday::from_number(7).is_none());
    }

    #[test]
    fn sunday_is_zero() {
        assert_eq!(Weekday::Sunday.number(), 0);
        assert!(Weekday::Sunday.is_sunday());
        assert!(!Weekday::Saturday.is_sunday());
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }
}
