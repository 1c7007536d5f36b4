//! Liturgical seasons and the season calculator.
//!
//! A date is classified from two offsets:
//!
//! * the **Easter point**, days from Easter Sunday of the date's year;
//! * the **Christmas point**, days from the governing Christmas Day (the
//!   previous year's for January and February).
//!
//! The rules are tried in order and the first match wins, so the table is
//! total: every date has exactly one season.
//!
//! | Condition                                       | Season        |
//! |-------------------------------------------------|---------------|
//! | −62 ≤ ep ≤ −47                                  | Pre-Lent      |
//! | advent offset ≤ cp ≤ −1                         | Advent        |
//! | 0 ≤ cp ≤ 11                                     | Christmas     |
//! | 12 ≤ cp < 40                                    | Epiphany      |
//! | ep ≤ −62                                        | Ordinary Time |
//! | −47 < ep < −7                                   | Lent          |
//! | −7 ≤ ep < 0                                     | Holy Week     |
//! | 0 ≤ ep < 49                                     | Easter        |
//! | 49 ≤ ep < 56                                    | Pentecost     |
//! | Sunday, 1–4 weeks before Advent Sunday          | Pre-Advent    |
//! | otherwise                                       | Trinity       |

use lit_time::{
    advent_sunday_linear, advent_sunday_offset, christmas_point_of_linear,
    easter_point_of_linear, sunday_week_of_linear, week_start_linear, weekday_of_linear,
    ymd_from_linear, Date,
};

use crate::colour::Colour;
use crate::week::{numbered, WeekDescriptor};

/// A liturgical season.
///
/// `PreLent` and `PreAdvent` are internal refinements of Ordinary Time: they
/// drive week naming and readings but are presented as
/// [`OrdinaryTime`](Season::OrdinaryTime) (see [`Season::presented`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    /// Advent Sunday to Christmas Eve.
    Advent,
    /// Christmas Day to January 5.
    Christmas,
    /// The Epiphany to the end of the Christmas cycle.
    Epiphany,
    /// The Sundays before Lent (internal).
    #[cfg_attr(feature = "serde", serde(rename = "Pre-Lent"))]
    PreLent,
    /// Ordinary Time.
    #[cfg_attr(feature = "serde", serde(rename = "Ordinary Time"))]
    OrdinaryTime,
    /// Ash Wednesday to the eve of Palm Sunday.
    Lent,
    /// Palm Sunday to Holy Saturday.
    #[cfg_attr(feature = "serde", serde(rename = "Holy Week"))]
    HolyWeek,
    /// Easter Day to the eve of Pentecost.
    Easter,
    /// The week of Pentecost.
    Pentecost,
    /// Trinity Sunday until the Sundays before Advent.
    Trinity,
    /// The Sundays before Advent (internal).
    #[cfg_attr(feature = "serde", serde(rename = "Pre-Advent"))]
    PreAdvent,
}

impl Season {
    /// Display name, e.g. `"Holy Week"`.
    pub fn name(&self) -> &'static str {
        match self {
            Season::Advent => "Advent",
            Season::Christmas => "Christmas",
            Season::Epiphany => "Epiphany",
            Season::PreLent => "Pre-Lent",
            Season::OrdinaryTime => "Ordinary Time",
            Season::Lent => "Lent",
            Season::HolyWeek => "Holy Week",
            Season::Easter => "Easter",
            Season::Pentecost => "Pentecost",
            Season::Trinity => "Trinity",
            Season::PreAdvent => "Pre-Advent",
        }
    }

    /// The season shown to users: Pre-Lent and Pre-Advent collapse to
    /// Ordinary Time, every other season is unchanged.
    pub fn presented(&self) -> Season {
        match self {
            Season::PreLent | Season::PreAdvent => Season::OrdinaryTime,
            other => *other,
        }
    }

    /// Whether this is one of the internal-only seasons.
    pub fn is_internal(&self) -> bool {
        self.presented() != *self
    }

    /// Reference page describing the season.
    pub fn url(&self) -> &'static str {
        match self {
            Season::Advent => "https://en.wikipedia.org/wiki/Advent",
            Season::Christmas => "https://en.wikipedia.org/wiki/Christmastide",
            Season::Epiphany => "https://en.wikipedia.org/wiki/Epiphany_season",
            Season::PreLent => "https://en.wikipedia.org/wiki/Septuagesima",
            Season::Lent => "https://en.wikipedia.org/wiki/Lent",
            Season::HolyWeek => "https://en.wikipedia.org/wiki/Holy_Week",
            Season::Easter => "https://en.wikipedia.org/wiki/Eastertide",
            Season::OrdinaryTime | Season::Pentecost | Season::Trinity | Season::PreAdvent => {
                "https://en.wikipedia.org/wiki/Ordinary_Time"
            }
        }
    }

    /// Colour of an ordinary day in this season.
    pub fn colour(&self) -> Colour {
        match self {
            Season::Advent | Season::Lent => Colour::Purple,
            Season::Christmas | Season::Epiphany | Season::Easter => Colour::White,
            Season::HolyWeek => Colour::Red,
            _ => Colour::Green,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Classification ────────────────────────────────────────────────────────────

/// The offsets a date is classified by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonPoints {
    /// Days from Easter Sunday of the date's year.
    pub easter: i32,
    /// Days from the governing Christmas Day.
    pub christmas: i32,
    /// Advent Sunday relative to Christmas Day of the date's year.
    pub advent_offset: i32,
    /// Whole weeks from the date to Advent Sunday of its year (floored).
    pub weeks_until_advent: i32,
    /// Whether the date is a Sunday.
    pub is_sunday: bool,
}

impl SeasonPoints {
    /// Compute the offsets of `date`.
    pub fn of(date: Date) -> Self {
        Self::of_linear(date.linear())
    }

    /// Compute the offsets of a raw linear day index, which may lie before
    /// 0001-01-01.
    pub fn of_linear(index: i32) -> Self {
        let (year, _, _) = ymd_from_linear(index);
        Self {
            easter: easter_point_of_linear(index),
            christmas: christmas_point_of_linear(index),
            advent_offset: advent_sunday_offset(year),
            weeks_until_advent: (advent_sunday_linear(year) - index).div_euclid(7),
            is_sunday: weekday_of_linear(index).is_sunday(),
        }
    }
}

type Rule = (fn(&SeasonPoints) -> bool, Season);

/// Ordered classification rules; the first match wins.
const RULES: &[Rule] = &[
    (|p| (-62..=-47).contains(&p.easter), Season::PreLent),
    (|p| (p.advent_offset..=-1).contains(&p.christmas), Season::Advent),
    (|p| (0..=11).contains(&p.christmas), Season::Christmas),
    (|p| (12..40).contains(&p.christmas), Season::Epiphany),
    (|p| p.easter <= -62, Season::OrdinaryTime),
    (|p| -47 < p.easter && p.easter < -7, Season::Lent),
    (|p| (-7..0).contains(&p.easter), Season::HolyWeek),
    (|p| (0..49).contains(&p.easter), Season::Easter),
    (|p| (49..56).contains(&p.easter), Season::Pentecost),
    (
        |p| p.is_sunday && 0 < p.weeks_until_advent && p.weeks_until_advent <= 4,
        Season::PreAdvent,
    ),
];

/// Classify a set of offsets.
pub fn classify(points: &SeasonPoints) -> Season {
    RULES
        .iter()
        .find(|(applies, _)| applies(points))
        .map_or(Season::Trinity, |&(_, season)| season)
}

/// Season of `date`.
pub fn determine_season(date: Date) -> Season {
    classify(&SeasonPoints::of(date))
}

// ── Calculator ────────────────────────────────────────────────────────────────

/// Dates whose weekday readings always come from the fixed-date table.
const FIXED_READING_DATES: [(u8, u8); 13] = [
    (12, 29),
    (12, 30),
    (12, 31),
    (1, 2),
    (1, 3),
    (1, 4),
    (1, 5),
    (1, 7),
    (1, 8),
    (1, 9),
    (1, 10),
    (1, 11),
    (1, 12),
];

/// Number of weeks before Ash Wednesday that carry "n before Lent" weekday
/// readings.
const PRE_LENT_READING_WEEKS: i32 = 5;

/// Computes seasons and week descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonCalculator;

impl SeasonCalculator {
    /// Create a calculator.
    pub fn new() -> Self {
        SeasonCalculator
    }

    /// Season of `date`.
    pub fn determine_season(&self, date: Date) -> Season {
        determine_season(date)
    }

    /// Week descriptor of `date`.
    ///
    /// The week name and weekday reading key are derived from the Sunday that
    /// opens the week, using that Sunday's own year, so every day of a week
    /// shares them.  The season is that of `date` itself.
    ///
    /// The first six days of year 1 are opened by 31 December of year 0,
    /// which is named like any other Sunday.
    pub fn week_info(&self, date: Date) -> WeekDescriptor {
        let sunday = week_start_linear(date);
        let points = SeasonPoints::of_linear(sunday);
        let sunday_season = classify(&points);

        let (week_name, mut key) = name_week(sunday, sunday_season, &points);

        if let Some(n) = pre_lent_reading_week(sunday) {
            key = Some(format!("{n} before Lent"));
        }

        let (_, m, d) = date.ymd();
        if FIXED_READING_DATES.contains(&(m, d)) {
            key = None;
        }

        WeekDescriptor {
            season: determine_season(date),
            week_name,
            week_start_sunday: Date::from_linear(sunday).ok(),
            weekday_reading_key: key,
        }
    }
}

/// Week name and weekday reading key of the week opened by `sunday`.
fn name_week(sunday: i32, season: Season, p: &SeasonPoints) -> (String, Option<String>) {
    let same = |name: String| (name.clone(), Some(name));
    match season {
        Season::PreLent => {
            let n = (-49 - p.easter).div_euclid(7) + 1;
            if n > 0 {
                same(format!("{n} before Lent"))
            } else {
                same(season.name().to_string())
            }
        }
        Season::Advent => {
            let n = 1 + (p.christmas - p.advent_offset).div_euclid(7);
            same(numbered("Advent", n))
        }
        Season::Christmas => {
            let n = if p.christmas == 0 {
                1
            } else {
                1 + p.christmas.div_euclid(7)
            };
            (numbered("Christmas", n), None)
        }
        Season::Epiphany | Season::OrdinaryTime => {
            let n = (1 + (p.christmas - 12).div_euclid(7)).max(1);
            (numbered("Epiphany", n), Some(format!("Epiphany {n}")))
        }
        Season::Lent => {
            let n = ((p.easter + 42).div_euclid(7) + 1).max(1);
            same(numbered("Lent", n))
        }
        Season::HolyWeek | Season::Pentecost => same(season.name().to_string()),
        Season::Easter => same(numbered("Easter", 1 + p.easter.div_euclid(7))),
        Season::Trinity => {
            let name = if (56..63).contains(&p.easter) {
                "Trinity".to_string()
            } else {
                numbered("Proper", sunday_week_of_linear(sunday) - 18)
            };
            let trinity_week = (p.easter - 56).div_euclid(7) + 1;
            (name, Some(format!("Trinity {trinity_week}")))
        }
        Season::PreAdvent => same(format!("{} before Advent", p.weeks_until_advent)),
    }
}

/// For a Sunday in the five weeks before Ash Wednesday, how many weeks
/// before Lent its week is.
fn pre_lent_reading_week(sunday: i32) -> Option<i32> {
    let ash_wednesday = sunday - easter_point_of_linear(sunday) - 46;
    let start = ash_wednesday - 7 * PRE_LENT_READING_WEEKS;
    if !(start..ash_wednesday).contains(&sunday) {
        return None;
    }
    let n = (ash_wednesday - sunday).div_euclid(7) + 1;
    (1..=PRE_LENT_READING_WEEKS).contains(&n).then_some(n)
}
