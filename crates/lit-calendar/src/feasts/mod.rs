//! Feasts: kinds, candidates and the feast tables.
//!
//! Observances are looked up two ways: movable feasts by their offset from
//! Easter Sunday, fixed feasts by month and day.  Both tables hold at most one
//! feast per key.

use std::collections::HashMap;

use lit_time::MonthDay;

use crate::colour::Colour;

mod fixed;
mod movable;

pub use fixed::FIXED_FEASTS;
pub use movable::MOVABLE_FEASTS;

// ── Kinds ─────────────────────────────────────────────────────────────────────

/// Rank of an observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeastKind {
    /// Principal Feast (Christmas, Easter, Pentecost, ...).
    PrincipalFeast,
    /// Principal Holy Day (Ash Wednesday, Maundy Thursday, Good Friday).
    PrincipalHolyDay,
    /// Festival (apostles, evangelists, ...).
    Festival,
    /// A Sunday.
    Sunday,
    /// Lesser Festival.
    LesserFestival,
    /// Commemoration.
    Commemoration,
}

impl FeastKind {
    /// Precedence of this rank; higher wins.
    pub fn precedence(&self) -> u8 {
        match self {
            FeastKind::PrincipalFeast | FeastKind::PrincipalHolyDay => 9,
            FeastKind::Festival => 7,
            FeastKind::Sunday => 5,
            FeastKind::LesserFestival => 4,
            FeastKind::Commemoration => 3,
        }
    }
}

/// Precedence of a day with no observance.
pub const WEEKDAY_PRECEDENCE: u8 = 1;

// ── Candidates ────────────────────────────────────────────────────────────────

/// An observance competing for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeastCandidate {
    /// Name of the observance; empty for a plain weekday.
    pub name: String,
    /// Precedence; higher wins.
    pub precedence: u8,
    /// Explicit colour, overriding the default for the rank and season.
    pub colour: Option<Colour>,
    /// Whether the observance commemorates a martyr.
    pub martyr: bool,
    /// Rank of the observance.
    pub kind: Option<FeastKind>,
    /// Proper readings of the observance.
    pub readings: Vec<String>,
}

impl FeastCandidate {
    /// A candidate of the given rank with no colour, martyr flag or readings.
    pub fn new(name: impl Into<String>, kind: FeastKind) -> Self {
        Self {
            name: name.into(),
            precedence: kind.precedence(),
            colour: None,
            martyr: false,
            kind: Some(kind),
            readings: Vec::new(),
        }
    }

    /// The implicit observance of a Sunday, named after its week.
    pub fn sunday(week_name: impl Into<String>) -> Self {
        Self::new(week_name, FeastKind::Sunday)
    }

    /// A weekday with no observance.
    pub fn none() -> Self {
        Self {
            name: String::new(),
            precedence: WEEKDAY_PRECEDENCE,
            colour: None,
            martyr: false,
            kind: None,
            readings: Vec::new(),
        }
    }

    /// Set an explicit colour.
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    /// Mark as a martyr's day.
    pub fn with_martyr(mut self, martyr: bool) -> Self {
        self.martyr = martyr;
        self
    }

    /// Attach proper readings.
    pub fn with_readings<I, S>(mut self, readings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.readings = readings.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the candidate names an observance.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Whether the candidate is the observance of a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.kind == Some(FeastKind::Sunday)
    }
}

// ── Static definitions ────────────────────────────────────────────────────────

/// A built-in feast definition.
#[derive(Debug, Clone, Copy)]
pub struct FeastDef {
    /// Name of the feast.
    pub name: &'static str,
    /// Rank.
    pub kind: FeastKind,
    /// Explicit colour.
    pub colour: Option<Colour>,
    /// Martyr flag.
    pub martyr: bool,
    /// Proper readings: first, second, gospel, psalm.
    pub readings: &'static [&'static str],
}

impl FeastDef {
    /// Build the corresponding candidate.
    pub fn to_candidate(&self) -> FeastCandidate {
        FeastCandidate {
            name: self.name.to_string(),
            precedence: self.kind.precedence(),
            colour: self.colour,
            martyr: self.martyr,
            kind: Some(self.kind),
            readings: self.readings.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// A feast at a fixed offset from Easter Sunday.
#[derive(Debug, Clone, Copy)]
pub struct MovableFeast {
    /// Days from Easter Sunday.
    pub easter_offset: i32,
    /// The feast.
    pub feast: FeastDef,
}

/// A feast on a fixed calendar date.
#[derive(Debug, Clone, Copy)]
pub struct FixedFeast {
    /// Month and day.
    pub date: MonthDay,
    /// The feast.
    pub feast: FeastDef,
}

// ── Table ─────────────────────────────────────────────────────────────────────

/// Movable and fixed feasts.
#[derive(Debug, Clone, Default)]
pub struct FeastTable {
    movable: HashMap<i32, FeastCandidate>,
    fixed: HashMap<MonthDay, FeastCandidate>,
}

impl FeastTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in calendar.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for f in MOVABLE_FEASTS {
            table.insert_movable(f.easter_offset, f.feast.to_candidate());
        }
        for f in FIXED_FEASTS {
            table.insert_fixed(f.date, f.feast.to_candidate());
        }
        table
    }

    /// Register (or replace) the feast `easter_offset` days from Easter.
    pub fn insert_movable(&mut self, easter_offset: i32, feast: FeastCandidate) {
        self.movable.insert(easter_offset, feast);
    }

    /// Register (or replace) the feast on `date`.
    pub fn insert_fixed(&mut self, date: MonthDay, feast: FeastCandidate) {
        self.fixed.insert(date, feast);
    }

    /// Feast at `easter_point` days from Easter Sunday.
    pub fn movable(&self, easter_point: i32) -> Option<&FeastCandidate> {
        self.movable.get(&easter_point)
    }

    /// Feast on `date`.
    pub fn fixed(&self, date: MonthDay) -> Option<&FeastCandidate> {
        self.fixed.get(&date)
    }

    /// Number of feasts in both tables.
    pub fn len(&self) -> usize {
        self.movable.len() + self.fixed.len()
    }

    /// Whether both tables are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedences() {
        assert_eq!(FeastKind::PrincipalFeast.precedence(), 9);
        assert_eq!(FeastKind::PrincipalHolyDay.precedence(), 9);
        assert_eq!(FeastKind::Festival.precedence(), 7);
        assert_eq!(FeastKind::Sunday.precedence(), 5);
        assert_eq!(FeastKind::LesserFestival.precedence(), 4);
        assert_eq!(FeastKind::Commemoration.precedence(), 3);
    }

    #[test]
    fn candidates() {
        let none = FeastCandidate::none();
        assert!(!none.is_valid());
        assert_eq!(none.precedence, 1);

        let sunday = FeastCandidate::sunday("Lent 4");
        assert!(sunday.is_sunday());
        assert_eq!(sunday.precedence, 5);

        let f = FeastCandidate::new("Stephen", FeastKind::Festival)
            .with_martyr(true)
            .with_readings(["Acts 7:51-60"]);
        assert!(f.is_valid());
        assert!(!f.is_sunday());
        assert_eq!(f.readings, vec!["Acts 7:51-60".to_string()]);
    }

    #[test]
    fn builtin_table() {
        let t = FeastTable::builtin();
        assert_eq!(t.movable(0).unwrap().name, "Easter Day");
        assert_eq!(t.movable(-46).unwrap().name, "Ash Wednesday");
        assert!(t.movable(1).is_none());

        let barnabas = t.fixed(MonthDay::new_unchecked(6, 11)).unwrap();
        assert_eq!(barnabas.name, "Barnabas the Apostle");
        assert_eq!(barnabas.precedence, 7);
        assert!(barnabas.martyr);

        assert!(t.fixed(MonthDay::new_unchecked(12, 30)).is_none());
    }

    #[test]
    fn builtin_keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for f in FIXED_FEASTS {
            assert!(seen.insert(f.date), "duplicate fixed feast on {}", f.date);
        }
        let mut seen = std::collections::HashSet::new();
        for f in MOVABLE_FEASTS {
            assert!(seen.insert(f.easter_offset), "duplicate movable feast at {}", f.easter_offset);
        }
    }
}
