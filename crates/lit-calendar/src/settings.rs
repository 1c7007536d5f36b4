//! `Settings` — explicit configuration for the feast resolver.
//!
//! There is no process-wide configuration: a `Settings` value is built by the
//! caller (or deserialised, with the `serde` feature) and handed to
//! [`FeastResolver::new`](crate::FeastResolver::new).

use lit_core::errors::Result;

use crate::colour::ColourPalette;

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Settings {
    /// Display codes for the liturgical colours.
    pub palette: ColourPalette,
    /// Whether a feast displaced by a higher observance reappears on the
    /// following day.
    pub transfer_feasts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: ColourPalette::default(),
            transfer_feasts: true,
        }
    }
}

impl Settings {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the colour palette.
    pub fn with_palette(mut self, palette: ColourPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable or disable transferred feasts.
    pub fn with_transfer_feasts(mut self, enabled: bool) -> Self {
        self.transfer_feasts = enabled;
        self
    }

    /// Check settings that arrived from outside, e.g. a deserialised
    /// configuration file.
    pub fn validate(&self) -> Result<()> {
        self.palette.validate()
    }
}
