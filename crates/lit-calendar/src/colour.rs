//! Liturgical colours and their display codes.

use lit_core::ensure;
use lit_core::errors::Result;

/// A liturgical colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Colour {
    /// White (or gold): principal feasts, Christmas, Easter.
    White,
    /// Red: martyrs, Pentecost, Holy Week.
    Red,
    /// Green: Ordinary Time.
    Green,
    /// Purple (or violet): Advent and Lent.
    Purple,
    /// Rose: the third Sunday of Advent and the fourth of Lent.
    Rose,
}

impl Colour {
    /// Every colour.
    pub const ALL: [Colour; 5] = [
        Colour::White,
        Colour::Red,
        Colour::Green,
        Colour::Purple,
        Colour::Rose,
    ];

    /// Lower-case name, e.g. `"purple"`.
    pub fn name(&self) -> &'static str {
        match self {
            Colour::White => "white",
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Purple => "purple",
            Colour::Rose => "rose",
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hex display code for each colour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ColourPalette {
    /// Code for [`Colour::White`].
    pub white: String,
    /// Code for [`Colour::Red`].
    pub red: String,
    /// Code for [`Colour::Green`].
    pub green: String,
    /// Code for [`Colour::Purple`].
    pub purple: String,
    /// Code for [`Colour::Rose`].
    pub rose: String,
}

impl Default for ColourPalette {
    fn default() -> Self {
        Self {
            white: "#FFFFFF".into(),
            red: "#FF0000".into(),
            green: "#00FF00".into(),
            purple: "#800080".into(),
            rose: "#FFB6C1".into(),
        }
    }
}

impl ColourPalette {
    /// The code for `colour`.
    pub fn code(&self, colour: Colour) -> &str {
        match colour {
            Colour::White => &self.white,
            Colour::Red => &self.red,
            Colour::Green => &self.green,
            Colour::Purple => &self.purple,
            Colour::Rose => &self.rose,
        }
    }

    /// Check that every code is a `#RRGGBB` hex colour.
    pub fn validate(&self) -> Result<()> {
        for colour in Colour::ALL {
            let code = self.code(colour);
            let hex = code.strip_prefix('#').unwrap_or_default();
            ensure!(
                hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
                "{colour} code {code:?} is not of the form #RRGGBB"
            );
        }
        Ok(())
    }
}
