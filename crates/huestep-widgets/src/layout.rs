//! Layout helpers: panel frames, section labels and buttons.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Frame, Margin, Response, RichText, Sense,
    Stroke, Ui, vec2,
};

use crate::{Palette, palette, sizing};

/// Standard panel frame with a soft shadow.
pub fn panel_frame(palette: &Palette) -> Frame {
    Frame::new()
        .fill(palette.panel_bg)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, palette.border))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(12))
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    let muted = palette(ui.ctx()).text_muted;
    ui.label(RichText::new(text).size(11.0).color(muted));
}

/// A flat text button. Disabled buttons are drawn muted and never report a click.
pub fn text_button(ui: &mut Ui, label: &str, enabled: bool) -> Response {
    button_inner(ui, label, false, enabled)
}

/// A text button drawn with the accent fill when `selected`.
pub fn toggle_button(ui: &mut Ui, label: &str, selected: bool) -> Response {
    button_inner(ui, label, selected, true)
}

fn button_inner(ui: &mut Ui, label: &str, selected: bool, enabled: bool) -> Response {
    let palette = palette(ui.ctx());
    let font_id = FontId::proportional(12.0);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
    let size = vec2(galley.size().x + 16.0, 24.0);

    let sense = if enabled {
        Sense::click()
    } else {
        Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    if ui.is_rect_visible(rect) {
        let bg_color = if selected {
            palette.accent
        } else if enabled && response.hovered() {
            palette.hover_bg
        } else {
            palette.button_bg
        };
        let text_color = if selected {
            Color32::WHITE
        } else if enabled {
            palette.text
        } else {
            palette.text_muted
        };

        ui.painter()
            .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
        if response.has_focus() {
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(2.0, palette.accent),
                egui::StrokeKind::Outside,
            );
        }
        ui.painter()
            .text(rect.center(), Align2::CENTER_CENTER, label, font_id, text_color);
    }

    if enabled {
        response.on_hover_cursor(CursorIcon::PointingHand)
    } else {
        response
    }
}
