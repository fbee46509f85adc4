//! Reusable egui widgets for the huestep color tool.
//!
//! - **Swatches**: gradient swatch strip and the single animated swatch
//! - **Picker**: hue+brightness panel with hex and RGB fields
//! - **Selector**: color-space radio group with roving keyboard focus
//! - **Slider**: vertical step-count slider on the step curve
//! - **Output**: read-only copy fields
//! - **Layout**: panel frames, section labels, buttons

pub mod layout;
pub mod output;
pub mod picker;
pub mod selector;
pub mod slider;
pub mod swatches;

pub use layout::{panel_frame, section_label, text_button, toggle_button};
pub use output::CopyField;
pub use picker::{ColorEditor, ColorEditorState, HuePanel};
pub use selector::SpaceSelector;
pub use slider::StepsSlider;
pub use swatches::{AnimatedSwatch, SwatchStrip};

use egui::{Color32, Context, Id};
use huestep_core::{Rgb, Theme, hex_to_rgb};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Swatch height in the strip
    pub const SWATCH_HEIGHT: f32 = 64.0;
    /// Hue panel size
    pub const PANEL_WIDTH: f32 = 240.0;
    pub const PANEL_HEIGHT: f32 = 160.0;
    /// Pointer dot radius on the hue panel
    pub const POINTER_RADIUS: f32 = 6.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub theme: Theme,
    pub text: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub hover_bg: Color32,
    pub button_bg: Color32,
    pub panel_bg: Color32,
    pub invalid: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        theme: Theme::Light,
        text: Color32::from_rgb(60, 60, 60),
        text_muted: Color32::from_rgb(120, 120, 120),
        border: Color32::from_rgb(220, 220, 220),
        accent: Color32::from_rgb(59, 130, 246),
        hover_bg: Color32::from_rgb(235, 235, 235),
        button_bg: Color32::from_rgb(245, 245, 245),
        panel_bg: Color32::from_rgb(250, 250, 252),
        invalid: Color32::from_rgb(220, 38, 38),
    };

    pub const DARK: Palette = Palette {
        theme: Theme::Dark,
        text: Color32::from_rgb(225, 225, 230),
        text_muted: Color32::from_rgb(150, 150, 160),
        border: Color32::from_rgb(60, 60, 68),
        accent: Color32::from_rgb(96, 165, 250),
        hover_bg: Color32::from_rgb(55, 55, 62),
        button_bg: Color32::from_rgb(42, 42, 48),
        panel_bg: Color32::from_rgb(30, 30, 34),
        invalid: Color32::from_rgb(248, 113, 113),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}

fn palette_id() -> Id {
    Id::new("huestep_palette")
}

/// Make `theme` the active palette and switch egui's visuals to match.
pub fn install_palette(ctx: &Context, theme: Theme) {
    let palette = Palette::for_theme(theme);
    ctx.data_mut(|data| data.insert_temp(palette_id(), palette));
    ctx.set_theme(egui_theme(theme));
}

/// The active palette.
///
/// # Panics
///
/// Panics if called before [`install_palette`]. Every widget in this crate
/// reads the palette, so this is a wiring bug in the host.
pub fn palette(ctx: &Context) -> Palette {
    match ctx.data(|data| data.get_temp::<Palette>(palette_id())) {
        Some(palette) => palette,
        None => panic!("huestep_widgets::palette read before install_palette"),
    }
}

pub fn egui_theme(theme: Theme) -> egui::Theme {
    match theme {
        Theme::Light => egui::Theme::Light,
        Theme::Dark => egui::Theme::Dark,
    }
}

/// The host's system theme, if egui knows it.
pub fn system_theme(ctx: &Context) -> Option<Theme> {
    ctx.system_theme().map(|theme| match theme {
        egui::Theme::Light => Theme::Light,
        egui::Theme::Dark => Theme::Dark,
    })
}

pub fn rgb_to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Convert a `"#RRGGBB"` string for painting.
pub fn hex_to_color32(hex: &str) -> Color32 {
    rgb_to_color32(hex_to_rgb(hex))
}

/// Text color readable on top of `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let luma = 0.299 * f32::from(background.r())
        + 0.587 * f32::from(background.g())
        + 0.114 * f32::from(background.b());
    if luma > 140.0 {
        Color32::from_gray(20)
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_round_trip_through_context() {
        let ctx = Context::default();
        install_palette(&ctx, Theme::Light);
        assert_eq!(palette(&ctx), Palette::LIGHT);

        install_palette(&ctx, Theme::Dark);
        assert_eq!(palette(&ctx).theme, Theme::Dark);
    }

    #[test]
    #[should_panic(expected = "before install_palette")]
    fn test_palette_outside_scope_panics() {
        let ctx = Context::default();
        palette(&ctx);
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#FF8000"), Color32::from_rgb(255, 128, 0));
        assert_eq!(hex_to_color32("abc"), Color32::from_rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text(Color32::WHITE), Color32::from_gray(20));
        assert_eq!(contrast_text(Color32::BLACK), Color32::WHITE);
    }
}
