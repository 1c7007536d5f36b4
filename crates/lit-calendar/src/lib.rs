//! # lit-calendar
//!
//! Seasons, weeks, feasts and colours of the liturgical year.
//!
//! The [`SeasonCalculator`] classifies a date into a [`Season`] and names its
//! week; the [`FeastResolver`] weighs the feasts of the [`FeastTable`]
//! against the Sunday, picks the colour and readings, and returns a
//! [`LiturgicalResult`].
//!
//! ```
//! use lit_calendar::{Colour, FeastResolver};
//! use lit_time::Date;
//!
//! let resolver = FeastResolver::default();
//! let easter = resolver.compute_liturgical_info(Date::from_ymd(2025, 4, 20)?);
//! assert_eq!(easter.name, "Easter Day");
//! assert_eq!(easter.colour, Colour::White);
//! # Ok::<(), lit_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Liturgical colours and the display palette.
pub mod colour;

/// Feast kinds, candidates and the built-in feast tables.
pub mod feasts;

/// `FeastResolver` — feast selection and result assembly.
pub mod resolver;

/// `LiturgicalResult` — the computed information of a date.
pub mod result;

/// Seasons, the classification rules and the `SeasonCalculator`.
pub mod season;

/// `Settings` — resolver configuration.
pub mod settings;

/// `WeekDescriptor` — the week a date belongs to.
pub mod week;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use colour::{Colour, ColourPalette};
pub use feasts::{FeastCandidate, FeastKind, FeastTable};
pub use resolver::{liturgical_colour, FeastResolver, TransferLookahead};
pub use result::LiturgicalResult;
pub use season::{determine_season, Season, SeasonCalculator};
pub use settings::Settings;
pub use week::WeekDescriptor;
