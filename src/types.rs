use serde::{Deserialize, Serialize};

/// The working palette always holds exactly this many swatches.
pub const PALETTE_SIZE: usize = 5;

/// One palette slot: a hex color plus a lock flag that shields it from
/// regeneration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub color: String,
    pub locked: bool,
}

impl Swatch {
    pub fn random() -> Self {
        Self {
            color: crate::color::random_color(),
            locked: false,
        }
    }
}

/// A saved snapshot of the five swatch colors, immutable once stored.
/// Serializes as a plain JSON array of color strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedPalette {
    pub colors: Vec<String>,
}

impl SavedPalette {
    pub fn snapshot(swatches: &[Swatch]) -> Self {
        Self {
            colors: swatches.iter().map(|s| s.color.clone()).collect(),
        }
    }
}

/// Light/dark presentation mode. Persisted as the literal strings
/// "light"/"dark"; anything else read back falls to light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}
