//! `LiturgicalResult` — everything computed for one date.

use lit_time::Date;

use crate::colour::Colour;
use crate::feasts::FeastKind;
use crate::season::Season;

/// Suffix appended to the name of a feast observed the day after its own.
pub const TRANSFERRED_SUFFIX: &str = " (transferred)";

/// The liturgical information of a date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiturgicalResult {
    /// The observance of the day; empty on a plain weekday.
    pub name: String,
    /// Precedence of the observance.
    pub precedence: u8,
    /// Rank of the observance, if any.
    pub kind: Option<FeastKind>,
    /// Whether the observance commemorates a martyr.
    pub martyr: bool,
    /// Presented season (never Pre-Lent or Pre-Advent).
    pub season: Season,
    /// Reference page for the presented season.
    pub season_url: String,
    /// Name of the week.
    pub week: String,
    /// Weekday readings key of the week, if any.
    pub weekday_reading: Option<String>,
    /// Liturgical colour.
    pub colour: Colour,
    /// Display code of the colour from the configured palette; serialised
    /// as `colourcode`.
    #[cfg_attr(feature = "serde", serde(rename = "colourcode"))]
    pub colour_code: String,
    /// Scripture readings.
    pub readings: Vec<String>,
    /// The date.
    pub date: Date,
}

impl LiturgicalResult {
    /// Whether the observance outranks a Sunday.
    pub fn is_high_precedence(&self) -> bool {
        self.precedence > 5
    }

    /// Whether the observance was transferred from the previous day.
    pub fn is_transferred(&self) -> bool {
        self.name.ends_with(TRANSFERRED_SUFFIX)
    }
}
