//! # liturgical
//!
//! Seasons, feasts, colours and lectionary readings of the Anglican
//! liturgical calendar, for any Gregorian date from year 1 to 9999.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lit-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! liturgical = "0.1"
//! ```
//!
//! ```rust
//! use liturgical::calendar::Colour;
//!
//! let info = liturgical::compute_liturgical_info_str("2025-12-14")?;
//! assert_eq!(info.name, "Advent 3");
//! assert_eq!(info.colour, Colour::Rose);
//! # Ok::<(), liturgical::core::Error>(())
//! ```
//!
//! The free functions use the built-in tables and default settings.  To
//! change the palette, switch off transferred feasts or resolve many dates,
//! build a [`FeastResolver`] once and call it directly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and result alias.
pub use lit_core as core;

/// Dates, weekdays and Easter / Advent arithmetic.
pub use lit_time as time;

/// Lectionary tables and readings selection.
pub use lit_readings as readings;

/// Seasons, feasts, colours and the feast resolver.
pub use lit_calendar as calendar;

pub use lit_calendar::{FeastResolver, LiturgicalResult, Settings};
pub use lit_core::{Error, Result};
pub use lit_time::Date;

/// Liturgical information of `date` with the built-in tables and default
/// settings.
pub fn compute_liturgical_info(date: Date) -> LiturgicalResult {
    FeastResolver::default().compute_liturgical_info(date)
}

/// Parse a `YYYY-MM-DD` date and compute its liturgical information.
pub fn compute_liturgical_info_str(text: &str) -> Result<LiturgicalResult> {
    FeastResolver::default().compute_liturgical_info_str(text)
}
