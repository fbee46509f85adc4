//! Hue+brightness picker panel and the color editor built around it.

use egui::{
    Color32, CornerRadius, CursorIcon, FontId, Mesh, Pos2, Rect, Sense, Shape, Stroke,
    StrokeKind, TextEdit, Ui, Vec2, vec2,
};
use huestep_core::{
    Hsv, HexField, PickerDrag, PickerSurface, PointerCapture, RgbField, hex_to_rgb, hsv_to_hex,
    hsv_to_pointer, hsv_to_rgb, rgb_to_hsv,
};

use crate::{hex_to_color32, palette, rgb_to_color32, section_label, sizing};

// Hue columns in the panel mesh. Every 60° sector boundary is a column edge.
const HUE_COLUMNS: u32 = 36;

fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(f64::from(pos.x), f64::from(pos.y))
}

fn to_kurbo_rect(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        f64::from(rect.min.x),
        f64::from(rect.min.y),
        f64::from(rect.max.x),
        f64::from(rect.max.y),
    )
}

fn hue_color(h: f64) -> Color32 {
    rgb_to_color32(hsv_to_rgb(Hsv { h, s: 100.0, v: 100.0 }))
}

/// Gradient mesh: black along the top edge, pure hues on the middle line,
/// white along the bottom edge.
fn panel_mesh(rect: Rect) -> Mesh {
    let mut mesh = Mesh::default();
    let rows = [rect.top(), rect.center().y, rect.bottom()];

    for column in 0..=HUE_COLUMNS {
        let t = f64::from(column) / f64::from(HUE_COLUMNS);
        let x = rect.left() + t as f32 * rect.width();
        let colors = [Color32::BLACK, hue_color(t * 360.0), Color32::WHITE];
        for (y, color) in rows.iter().zip(colors) {
            mesh.colored_vertex(Pos2::new(x, *y), color);
        }
    }

    for column in 0..HUE_COLUMNS {
        let left = column * 3;
        let right = left + 3;
        for row in 0..2 {
            mesh.add_triangle(left + row, right + row, left + row + 1);
            mesh.add_triangle(right + row, right + row + 1, left + row + 1);
        }
    }
    mesh
}

/// The interactive hue+brightness surface for one endpoint.
pub struct HuePanel<'a, C: PointerCapture> {
    surface: PickerSurface,
    color: &'a str,
    drag: &'a mut PickerDrag<C>,
    size: Vec2,
}

impl<'a, C: PointerCapture> HuePanel<'a, C> {
    pub fn new(surface: PickerSurface, color: &'a str, drag: &'a mut PickerDrag<C>) -> Self {
        Self {
            surface,
            color,
            drag,
            size: vec2(sizing::PANEL_WIDTH, sizing::PANEL_HEIGHT),
        }
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the panel. Returns the color under the pointer while this panel is dragged.
    pub fn show(self, ui: &mut Ui) -> Option<Hsv> {
        let palette = palette(ui.ctx());
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click_and_drag());

        if ui.is_rect_visible(rect) {
            ui.painter().add(Shape::mesh(panel_mesh(rect)));
            ui.painter().rect_stroke(
                rect,
                CornerRadius::ZERO,
                Stroke::new(1.0, palette.border),
                StrokeKind::Outside,
            );

            let hsv = rgb_to_hsv(hex_to_rgb(self.color));
            let offset = hsv_to_pointer(to_kurbo_rect(rect).size(), hsv);
            let dot = rect.min + vec2(offset.x as f32, offset.y as f32);
            ui.painter()
                .circle_filled(dot, sizing::POINTER_RADIUS, hex_to_color32(self.color));
            ui.painter()
                .circle_stroke(dot, sizing::POINTER_RADIUS, Stroke::new(2.0, Color32::WHITE));
            ui.painter().circle_stroke(
                dot,
                sizing::POINTER_RADIUS + 1.0,
                Stroke::new(1.0, Color32::from_black_alpha(160)),
            );
        }

        let (pressed, down, released, position) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });

        let mut picked = None;
        if let Some(position) = position {
            if pressed && response.hovered() {
                picked = self
                    .drag
                    .pointer_down(self.surface, to_kurbo_rect(rect), to_point(position));
            } else if down {
                picked = self
                    .drag
                    .pointer_move(to_point(position))
                    .filter(|(surface, _)| *surface == self.surface)
                    .map(|(_, hsv)| hsv);
            }
        }
        if released {
            self.drag.pointer_up();
        }

        response.on_hover_cursor(CursorIcon::Crosshair);
        picked
    }
}

/// Edit-field state of one color editor.
#[derive(Debug, Clone, Default)]
pub struct ColorEditorState {
    pub hex: HexField,
    pub rgb: RgbField,
}

impl ColorEditorState {
    pub fn new(committed: &str) -> Self {
        Self {
            hex: HexField::new(committed),
            rgb: RgbField::new(committed),
        }
    }
}

/// A hue panel with hex and RGB text fields for one endpoint color.
pub struct ColorEditor<'a, C: PointerCapture> {
    label: &'a str,
    surface: PickerSurface,
    committed: &'a str,
    state: &'a mut ColorEditorState,
    drag: &'a mut PickerDrag<C>,
}

impl<'a, C: PointerCapture> ColorEditor<'a, C> {
    pub fn new(
        label: &'a str,
        surface: PickerSurface,
        committed: &'a str,
        state: &'a mut ColorEditorState,
        drag: &'a mut PickerDrag<C>,
    ) -> Self {
        Self {
            label,
            surface,
            committed,
            state,
            drag,
        }
    }

    /// Show the editor. Returns a newly committed `"#RRGGBB"` color.
    pub fn show(self, ui: &mut Ui) -> Option<String> {
        let palette = palette(ui.ctx());
        self.state.hex.sync(self.committed);
        self.state.rgb.sync(self.committed);

        let mut committed = None;
        ui.vertical(|ui| {
            section_label(ui, self.label);

            if let Some(hsv) = HuePanel::new(self.surface, self.committed, self.drag).show(ui) {
                committed = Some(hsv_to_hex(hsv));
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let mut text = self.state.hex.text().to_string();
                let response = ui.add(
                    TextEdit::singleline(&mut text)
                        .font(FontId::monospace(12.0))
                        .desired_width(80.0)
                        .hint_text("#RRGGBB"),
                );
                if response.changed() {
                    self.state.hex.edit(&text);
                }
                if response.lost_focus() {
                    if let Some(hex) = self.state.hex.commit() {
                        committed = Some(hex);
                    }
                }
                if self.state.hex.is_invalid() {
                    ui.painter().rect_stroke(
                        response.rect,
                        CornerRadius::same(sizing::CORNER_RADIUS),
                        Stroke::new(1.5, palette.invalid),
                        StrokeKind::Outside,
                    );
                }

                let mut text = self.state.rgb.text().to_string();
                let response = ui.add(
                    TextEdit::singleline(&mut text)
                        .font(FontId::monospace(12.0))
                        .desired_width(110.0)
                        .hint_text("r, g, b"),
                );
                if response.changed() {
                    self.state.rgb.edit(&text);
                }
                if response.lost_focus() {
                    if let Some(rgb) = self.state.rgb.commit() {
                        committed = Some(rgb.to_hex());
                    }
                }
                if self.state.rgb.is_invalid() {
                    ui.painter().rect_stroke(
                        response.rect,
                        CornerRadius::same(sizing::CORNER_RADIUS),
                        Stroke::new(1.5, palette.invalid),
                        StrokeKind::Outside,
                    );
                }
            });
        });

        // Re-committing the current color is not a change
        committed.filter(|hex| !hex.eq_ignore_ascii_case(self.committed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_mesh_shape() {
        let mesh = panel_mesh(Rect::from_min_size(Pos2::ZERO, vec2(360.0, 200.0)));
        assert_eq!(mesh.vertices.len() as u32, (HUE_COLUMNS + 1) * 3);
        assert_eq!(mesh.indices.len() as u32, HUE_COLUMNS * 2 * 2 * 3);
    }

    #[test]
    fn test_panel_mesh_edges() {
        let mesh = panel_mesh(Rect::from_min_size(Pos2::ZERO, vec2(360.0, 200.0)));
        assert_eq!(mesh.vertices[0].color, Color32::BLACK);
        assert_eq!(mesh.vertices[1].color, Color32::from_rgb(255, 0, 0));
        assert_eq!(mesh.vertices[2].color, Color32::WHITE);
        // 120° is pure green
        let column = (HUE_COLUMNS / 3) as usize;
        assert_eq!(mesh.vertices[column * 3 + 1].color, Color32::from_rgb(0, 255, 0));
    }
}
