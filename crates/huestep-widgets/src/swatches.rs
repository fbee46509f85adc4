//! Gradient swatches.

use egui::{
    Align2, CornerRadius, CursorIcon, FontId, Rect, Sense, Stroke, StrokeKind, Ui, pos2, vec2,
};

use crate::{contrast_text, hex_to_color32, palette, sizing};

/// A row of equal-width swatches, one per resolved color.
pub struct SwatchStrip<'a> {
    colors: &'a [String],
    selected: Option<usize>,
    height: f32,
    show_labels: bool,
    clickable: bool,
}

impl<'a> SwatchStrip<'a> {
    pub fn new(colors: &'a [String]) -> Self {
        Self {
            colors,
            selected: None,
            height: sizing::SWATCH_HEIGHT,
            show_labels: true,
            clickable: true,
        }
    }

    /// Highlight the swatch at `index`.
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    /// Smaller strip without hex labels.
    pub fn compact(mut self) -> Self {
        self.height = sizing::SWATCH_HEIGHT / 2.0;
        self.show_labels = false;
        self
    }

    /// Swatches only show their color; clicks select nothing.
    pub fn display_only(mut self) -> Self {
        self.clickable = false;
        self
    }

    /// Show the strip. Returns the index and color of a clicked swatch.
    pub fn show(self, ui: &mut Ui) -> Option<(usize, String)> {
        let palette = palette(ui.ctx());
        let size = vec2(ui.available_width(), self.height);

        if self.colors.is_empty() {
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(1.0, palette.border),
                StrokeKind::Inside,
            );
            return None;
        }

        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let width = rect.width() / self.colors.len() as f32;
        // Labels only when they fit
        let labels = self.show_labels && width >= 52.0;

        let mut clicked = None;
        for (index, color) in self.colors.iter().enumerate() {
            let swatch = Rect::from_min_size(
                pos2(rect.left() + width * index as f32, rect.top()),
                vec2(width, rect.height()),
            );
            let sense = if self.clickable {
                Sense::click()
            } else {
                Sense::hover()
            };
            let mut response = ui
                .interact(swatch, ui.id().with(("swatch", index)), sense)
                .on_hover_text(color.as_str());
            if self.clickable {
                response = response.on_hover_cursor(CursorIcon::PointingHand);
            }

            let fill = hex_to_color32(color);
            ui.painter().rect_filled(swatch, CornerRadius::ZERO, fill);

            if labels {
                ui.painter().text(
                    swatch.center_bottom() - vec2(0.0, 10.0),
                    Align2::CENTER_CENTER,
                    color,
                    FontId::monospace(10.0),
                    contrast_text(fill),
                );
            }

            if self.selected == Some(index) {
                ui.painter().rect_stroke(
                    swatch.shrink(1.0),
                    CornerRadius::ZERO,
                    Stroke::new(3.0, contrast_text(fill)),
                    StrokeKind::Inside,
                );
            }

            if self.clickable && response.clicked() {
                clicked = Some((index, color.clone()));
            }
        }

        ui.painter().rect_stroke(
            rect,
            CornerRadius::same(sizing::CORNER_RADIUS),
            Stroke::new(1.0, palette.border),
            StrokeKind::Outside,
        );

        clicked
    }
}

/// The single swatch shown in animation mode.
pub struct AnimatedSwatch<'a> {
    color: Option<&'a str>,
    height: f32,
}

impl<'a> AnimatedSwatch<'a> {
    pub fn new(color: Option<&'a str>) -> Self {
        Self {
            color,
            height: sizing::SWATCH_HEIGHT,
        }
    }

    pub fn compact(mut self) -> Self {
        self.height = sizing::SWATCH_HEIGHT / 2.0;
        self
    }

    pub fn show(self, ui: &mut Ui) {
        let palette = palette(ui.ctx());
        let size = vec2(ui.available_width(), self.height);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());

        if let Some(color) = self.color {
            let fill = hex_to_color32(color);
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), fill);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                color,
                FontId::monospace(12.0),
                contrast_text(fill),
            );
        }
        ui.painter().rect_stroke(
            rect,
            CornerRadius::same(sizing::CORNER_RADIUS),
            Stroke::new(1.0, palette.border),
            StrokeKind::Outside,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install_palette;
    use egui::{CentralPanel, Context, Event, Modifiers, PointerButton, Pos2, RawInput};
    use huestep_core::Theme;

    fn frame(
        ctx: &Context,
        colors: &[String],
        display_only: bool,
        events: Vec<Event>,
    ) -> Option<(usize, String)> {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let mut clicked = None;
        let _ = ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let strip = SwatchStrip::new(colors);
                let strip = if display_only {
                    strip.display_only()
                } else {
                    strip
                };
                if let Some(hit) = strip.show(ui) {
                    clicked = Some(hit);
                }
            });
        });
        clicked
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Click the first swatch and report what the strip returned.
    fn click_first(display_only: bool) -> Option<(usize, String)> {
        let ctx = Context::default();
        install_palette(&ctx, Theme::Light);
        let colors = vec!["#000000".to_string(), "#FFFFFF".to_string()];
        let pos = pos2(100.0, 40.0);

        let mut clicked = frame(&ctx, &colors, display_only, vec![Event::PointerMoved(pos)]);
        clicked = clicked.or(frame(&ctx, &colors, display_only, vec![button(pos, true)]));
        clicked.or(frame(&ctx, &colors, display_only, vec![button(pos, false)]))
    }

    #[test]
    fn test_click_selects_swatch() {
        assert_eq!(click_first(false), Some((0, "#000000".to_string())));
    }

    #[test]
    fn test_display_only_ignores_clicks() {
        assert_eq!(click_first(true), None);
    }
}
