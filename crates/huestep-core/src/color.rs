//! Hex, RGB and HSV conversions used by the picker and the edit fields.
//!
//! All conversions are total: malformed input degrades to some color
//! rather than failing. Validation lives in [`normalize_hex`] and
//! [`normalize_rgb_input`], which return `None` for anything invalid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees `[0, 360)`, saturation and value in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from fractional channels, rounding and clamping each to `[0, 255]`.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: round_channel(r),
            g: round_channel(g),
            b: round_channel(b),
        }
    }

    /// Format as `"#RRGGBB"`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Format as `"r, g, b"`, the form the RGB edit field shows.
    pub fn to_rgb_text(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn round_channel(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    channel.round().clamp(0.0, 255.0) as u8
}

/// Expand a hex string to exactly six characters.
///
/// Strips the first `#` and surrounding whitespace. A 3-character body has
/// each character doubled (`"abc"` becomes `"aabbcc"`); anything else is
/// right-padded with `'0'` and truncated to six characters. The characters
/// are not validated.
pub fn expand_short_hex(hex: &str) -> String {
    let body = hex.replacen('#', "", 1);
    let body = body.trim();

    if body.chars().count() == 3 {
        return body.chars().flat_map(|c| [c, c]).collect();
    }

    body.chars().chain(std::iter::repeat('0')).take(6).collect()
}

/// Parse a hex string into channels.
///
/// Only the leading run of hex digits is used, so `"12zz56"` reads as
/// `0x12`. No digits at all reads as black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let expanded = expand_short_hex(hex);
    let digits: String = expanded.chars().take_while(char::is_ascii_hexdigit).collect();
    let value = u32::from_str_radix(&digits, 16).unwrap_or(0);

    Rgb {
        r: ((value >> 16) & 255) as u8,
        g: ((value >> 8) & 255) as u8,
        b: (value & 255) as u8,
    }
}

pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Convert to HSV using the 60° sector formula.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut h = 0.0;
    if delta != 0.0 {
        h = if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        h *= 60.0;
        if h < 0.0 {
            h += 360.0;
        }
    }

    let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };
    let v = max * 100.0;

    Hsv { h, s, v }
}

/// Convert back to RGB. Hue wraps modulo 360; saturation and value are clamped.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let saturation = hsv.s.clamp(0.0, 100.0) / 100.0;
    let value = hsv.v.clamp(0.0, 100.0) / 100.0;
    let hue = hsv.h.rem_euclid(360.0);

    let chroma = value * saturation;
    let second = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let matched = value - chroma;

    let (r, g, b) = if hue < 60.0 {
        (chroma, second, 0.0)
    } else if hue < 120.0 {
        (second, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, second)
    } else if hue < 240.0 {
        (0.0, second, chroma)
    } else if hue < 300.0 {
        (second, 0.0, chroma)
    } else {
        (chroma, 0.0, second)
    };

    Rgb::from_channels(
        (r + matched) * 255.0,
        (g + matched) * 255.0,
        (b + matched) * 255.0,
    )
}

pub fn hsv_to_hex(hsv: Hsv) -> String {
    rgb_to_hex(hsv_to_rgb(hsv))
}

/// Validate and normalize user hex input.
///
/// Accepts exactly three or six hex digits with an optional leading `#`
/// and returns `"#RRGGBB"`, or `None` when the input is not a hex color.
pub fn normalize_hex(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let full = match body.len() {
        3 => body.chars().flat_map(|c| [c, c]).collect(),
        6 => body.to_string(),
        _ => return None,
    };

    Some(format!("#{}", full.to_ascii_uppercase()))
}

/// Validate user RGB input of the form `"r, g, b"` or `"rgb(r, g, b)"`.
///
/// Parts may be separated by commas and/or whitespace. Each of exactly
/// three parts must be a finite number that rounds into `[0, 255]`.
pub fn normalize_rgb_input(text: &str) -> Option<Rgb> {
    let trimmed = text.trim();
    let lowered = trimmed.to_ascii_lowercase();
    let inner = match lowered.strip_prefix("rgb(") {
        Some(rest) => rest.strip_suffix(')')?,
        None => lowered.as_str(),
    };

    let parts: Vec<&str> = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 3 {
        return None;
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: f64 = part.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        let rounded = value.round();
        if !(0.0..=255.0).contains(&rounded) {
            return None;
        }
        *slot = rounded as u8;
    }

    Some(Rgb::new(channels[0], channels[1], channels[2]))
}
