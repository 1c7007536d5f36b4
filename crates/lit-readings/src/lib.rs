//! # lit-readings
//!
//! Lectionary tables and readings selection for the liturgical calendar.
//!
//! The [`Lectionary`] indexes Sunday, weekday and fixed-date readings; the
//! [`ReadingsSelector`] picks the right list for a date from its week name
//! and weekday reading key, using the three-year Sunday and two-year weekday
//! [cycles](LectionaryCycle).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Sunday and weekday lectionary cycles.
pub mod cycle;

/// Built-in readings tables.
pub mod data;

/// `Lectionary` — indexed readings tables.
pub mod lectionary;

/// `ReadingsSelector` — tiered readings lookup.
pub mod selector;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cycle::{LectionaryCycle, SundayCycle, WeekdayCycle};
pub use lectionary::Lectionary;
pub use selector::{ReadingsSelector, ReadingsSource};
