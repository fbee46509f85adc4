//! Color mixing backed by the `color` crate (re-exported by peniko).

use peniko::color::{ColorSpaceTag, DynamicColor, HueDirection, Srgb, parse_color};

use super::ColorMixer;
use crate::color::Rgb;
use crate::space::ColorSpace;

/// Mixes colors with CSS Color 4 interpolation semantics.
///
/// Endpoints may be any CSS color string. Hue-based spaces interpolate
/// along the shorter arc, matching the `color-mix()` default.
#[derive(Debug, Clone, Copy, Default)]
pub struct PenikoMixer;

impl PenikoMixer {
    pub fn new() -> Self {
        Self
    }
}

fn tag(space: ColorSpace) -> ColorSpaceTag {
    match space {
        ColorSpace::Srgb => ColorSpaceTag::Srgb,
        ColorSpace::Hsl => ColorSpaceTag::Hsl,
        ColorSpace::Hwb => ColorSpaceTag::Hwb,
        ColorSpace::Lch => ColorSpaceTag::Lch,
        ColorSpace::Oklch => ColorSpaceTag::Oklch,
        ColorSpace::Lab => ColorSpaceTag::Lab,
        ColorSpace::Oklab => ColorSpaceTag::Oklab,
    }
}

fn parse(input: &str) -> Option<DynamicColor> {
    match parse_color(input.trim()) {
        Ok(color) => Some(color),
        Err(e) => {
            log::debug!("Cannot parse color {:?}: {}", input, e);
            None
        }
    }
}

impl ColorMixer for PenikoMixer {
    fn mix(&self, space: ColorSpace, start: &str, end: &str, percent: f64) -> Option<Rgb> {
        let start = parse(start)?;
        let end = parse(end)?;
        let t = (percent / 100.0).clamp(0.0, 1.0) as f32;

        let mixed = start
            .interpolate(end, tag(space), HueDirection::Shorter)
            .eval(t);
        let [r, g, b, _] = mixed.to_alpha_color::<Srgb>().components;

        // Out-of-gamut results are clipped channel-wise.
        Some(Rgb::from_channels(
            f64::from(r) * 255.0,
            f64::from(g) * 255.0,
            f64::from(b) * 255.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mix::{mix_at, resolve_color_mix};

    #[test]
    fn test_srgb_blue_to_red_midpoint() {
        let colors = resolve_color_mix(&PenikoMixer, "#0000ff", "#ff0000", 3, ColorSpace::Srgb);
        assert_eq!(colors, vec!["#0000FF", "#800080", "#FF0000"]);
    }

    #[test]
    fn test_hsl_takes_shorter_hue_arc() {
        let colors = resolve_color_mix(&PenikoMixer, "#0000ff", "#ff0000", 3, ColorSpace::Hsl);
        assert_eq!(colors[1], "#FF00FF");
    }

    #[test]
    fn test_single_step_is_mix_at_zero() {
        for space in ColorSpace::ALL {
            let colors = resolve_color_mix(&PenikoMixer, "#336699", "#ffcc00", 1, space);
            let at_zero = mix_at(&PenikoMixer, "#336699", "#ffcc00", space, 0.0);
            assert_eq!(colors.len(), 1);
            assert_eq!(Some(colors[0].clone()), at_zero, "space {space}");
        }
    }

    #[test]
    fn test_endpoints_in_every_space() {
        for space in ColorSpace::ALL {
            let colors = resolve_color_mix(&PenikoMixer, "#0000ff", "#ff0000", 10, space);
            assert_eq!(colors.len(), 10);
            assert_eq!(colors[0], "#0000FF", "space {space}");
            assert_eq!(colors[9], "#FF0000", "space {space}");
        }
    }

    #[test]
    fn test_mixing_color_with_itself_is_identity() {
        for space in ColorSpace::ALL {
            for steps in [1, 2, 7, 50] {
                let colors = resolve_color_mix(&PenikoMixer, "#3366CC", "#3366CC", steps, space);
                assert_eq!(colors.len(), steps as usize);
                assert!(colors.iter().all(|c| c == "#3366CC"), "space {space}: {colors:?}");
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let first = resolve_color_mix(&PenikoMixer, "#123456", "#fedcba", 17, ColorSpace::Oklch);
        let second = resolve_color_mix(&PenikoMixer, "#123456", "#fedcba", 17, ColorSpace::Oklch);
        assert_eq!(first, second);
    }

    #[test]
    fn test_accepts_short_hex_and_named_colors() {
        let colors = resolve_color_mix(&PenikoMixer, "#00f", "red", 2, ColorSpace::Srgb);
        assert_eq!(colors, vec!["#0000FF", "#FF0000"]);
    }

    #[test]
    fn test_unparsable_endpoint_yields_empty() {
        let colors = resolve_color_mix(&PenikoMixer, "not a color", "#ff0000", 5, ColorSpace::Lab);
        assert!(colors.is_empty());
    }
}
