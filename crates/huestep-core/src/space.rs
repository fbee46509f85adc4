//! Interpolation color spaces and keyboard navigation between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The color space a gradient is mixed in.
///
/// The order of [`ColorSpace::ALL`] is the order the selector shows and
/// navigates through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    #[default]
    Srgb,
    Hsl,
    Hwb,
    Lch,
    Oklch,
    Lab,
    Oklab,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown color space: {0}")]
pub struct UnknownColorSpace(pub String);

/// Direction of a selector keyboard move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
}

impl NavKey {
    /// Map a DOM-style key name to a navigation move.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "ArrowRight" => Some(Self::Next),
            "ArrowUp" | "ArrowLeft" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 7] = [
        Self::Srgb,
        Self::Hsl,
        Self::Hwb,
        Self::Lch,
        Self::Oklch,
        Self::Lab,
        Self::Oklab,
    ];

    /// Lowercase tag, as used in `color-mix(in <tag>, ...)`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::Hsl => "hsl",
            Self::Hwb => "hwb",
            Self::Lch => "lch",
            Self::Oklch => "oklch",
            Self::Lab => "lab",
            Self::Oklab => "oklab",
        }
    }

    /// Uppercase display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Srgb => "SRGB",
            Self::Hsl => "HSL",
            Self::Hwb => "HWB",
            Self::Lch => "LCH",
            Self::Oklch => "OKLCH",
            Self::Lab => "LAB",
            Self::Oklab => "OKLAB",
        }
    }

    /// Position in [`ColorSpace::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&space| space == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Apply a keyboard move. Next/Previous wrap around at both ends.
    pub fn navigate(self, key: NavKey) -> Self {
        let len = Self::ALL.len();
        let current = self.index();
        let next = match key {
            NavKey::Next => (current + 1) % len,
            NavKey::Previous => (current + len - 1) % len,
            NavKey::First => 0,
            NavKey::Last => len - 1,
        };
        Self::ALL[next]
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSpace {
    type Err = UnknownColorSpace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|space| space.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownColorSpace(s.to_string()))
    }
}
