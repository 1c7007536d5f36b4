//! `WeekDescriptor` — the liturgical week a date belongs to.

use lit_time::Date;

use crate::season::Season;

/// Week information for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekDescriptor {
    /// Season of the date itself (internal, not presented).
    pub season: Season,
    /// Name of the week, taken from its opening Sunday, e.g. `"Lent 3"`.
    pub week_name: String,
    /// The Sunday that opens the week; `None` only for the first week of
    /// year 1, which opens on 31 December of year 0.
    pub week_start_sunday: Option<Date>,
    /// Key into the weekday readings table, when the week has one.
    pub weekday_reading_key: Option<String>,
}

/// Render a numbered week name; a number of zero or less gives the bare
/// label.
pub(crate) fn numbered(label: &str, n: i32) -> String {
    if n > 0 {
        format!("{label} {n}")
    } else {
        label.to_string()
    }
}
