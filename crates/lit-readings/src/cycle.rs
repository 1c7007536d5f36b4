//! Lectionary cycles.
//!
//! Sunday readings rotate through a three-year cycle (A, B, C); weekday
//! readings alternate between two years.  Year 1 AD is Sunday year A, so the
//! cycle repeats from there: 2023 is A, 2024 is B, 2025 is C.

/// Three-year Sunday cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SundayCycle {
    /// Year A (Matthew).
    A,
    /// Year B (Mark).
    B,
    /// Year C (Luke).
    C,
}

impl SundayCycle {
    /// All cycles in order.
    pub const ALL: [SundayCycle; 3] = [SundayCycle::A, SundayCycle::B, SundayCycle::C];

    /// The Sunday cycle of `year`.
    pub fn for_year(year: i32) -> Self {
        Self::ALL[(year - 1).rem_euclid(3) as usize]
    }

    /// The letter of the cycle.
    pub fn letter(&self) -> char {
        match self {
            SundayCycle::A => 'A',
            SundayCycle::B => 'B',
            SundayCycle::C => 'C',
        }
    }
}

impl std::fmt::Display for SundayCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Two-year weekday cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeekdayCycle {
    /// Cycle 1, used in even-numbered years.
    One,
    /// Cycle 2, used in odd-numbered years.
    Two,
}

impl WeekdayCycle {
    /// The weekday cycle of `year`.
    pub fn for_year(year: i32) -> Self {
        if year % 2 == 0 {
            WeekdayCycle::One
        } else {
            WeekdayCycle::Two
        }
    }

    /// `1` or `2`.
    pub fn number(&self) -> u8 {
        match self {
            WeekdayCycle::One => 1,
            WeekdayCycle::Two => 2,
        }
    }
}

impl std::fmt::Display for WeekdayCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The pair of cycles in force for a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LectionaryCycle {
    /// Sunday cycle.
    pub sunday: SundayCycle,
    /// Weekday cycle.
    pub weekday: WeekdayCycle,
}

impl LectionaryCycle {
    /// Both cycles for `year`.
    pub fn for_year(year: i32) -> Self {
        Self {
            sunday: SundayCycle::for_year(year),
            weekday: WeekdayCycle::for_year(year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_cycle() {
        assert_eq!(SundayCycle::for_year(1), SundayCycle::A);
        assert_eq!(SundayCycle::for_year(2023), SundayCycle::A);
        assert_eq!(SundayCycle::for_year(2024), SundayCycle::B);
        assert_eq!(SundayCycle::for_year(2025), SundayCycle::C);
    }

    #[test]
    fn weekday_cycle() {
        assert_eq!(WeekdayCycle::for_year(2024), WeekdayCycle::One);
        assert_eq!(WeekdayCycle::for_year(2025), WeekdayCycle::Two);
        assert_eq!(WeekdayCycle::Two.to_string(), "2");
    }

    #[test]
    fn combined() {
        let c = LectionaryCycle::for_year(2026);
        assert_eq!(c.sunday, SundayCycle::A);
        assert_eq!(c.weekday, WeekdayCycle::One);
    }
}
