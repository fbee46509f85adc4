//! Hue+brightness picker surface math and pointer-drag tracking.
//!
//! The picker is a single rectangular panel: hue runs left to right over
//! the full 360°. The top half ramps value from black (top edge) to full
//! brightness at the middle line with saturation pinned at 100%; the
//! bottom half keeps value at 100% and fades saturation to white at the
//! bottom edge.

use kurbo::{Point, Rect, Size};

use crate::color::Hsv;

/// Value at or above which a color is placed in the bottom half of the
/// panel. Keeps the pointer from jumping across the seam on rounding noise.
pub const SEAM_TOLERANCE: f64 = 99.5;

/// Map a pointer position (relative to the panel origin) to a color.
pub fn pointer_to_hsv(panel: Size, position: Point) -> Hsv {
    if panel.width <= 0.0 || panel.height <= 0.0 {
        return Hsv { h: 0.0, s: 100.0, v: 0.0 };
    }

    let x = position.x.clamp(0.0, panel.width);
    let y = position.y.clamp(0.0, panel.height);

    let h = x / panel.width * 360.0;
    let y_ratio = y / panel.height;

    if y_ratio <= 0.5 {
        Hsv { h, s: 100.0, v: y_ratio / 0.5 * 100.0 }
    } else {
        Hsv { h, s: 100.0 - (y_ratio - 0.5) / 0.5 * 100.0, v: 100.0 }
    }
}

/// Where to draw the pointer dot for a color, relative to the panel origin.
pub fn hsv_to_pointer(panel: Size, hsv: Hsv) -> Point {
    let x = hsv.h / 360.0 * panel.width;
    let y = if hsv.v >= SEAM_TOLERANCE {
        (0.5 + (100.0 - hsv.s) / 100.0 * 0.5) * panel.height
    } else {
        hsv.v / 100.0 * 0.5 * panel.height
    };
    Point::new(x, y)
}

/// Which picker panel a drag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerSurface {
    Start,
    End,
}

/// Pointer-drag state of the picker panels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A drag that began on `surface`, whose bounds were `bounds` at the time.
    Dragging { surface: PickerSurface, bounds: Rect },
}

/// Host hook for receiving pointer moves and releases outside the panel.
///
/// `capture` is called once when a drag begins and `release` exactly once
/// when it ends.
pub trait PointerCapture {
    fn capture(&mut self);
    fn release(&mut self);
}

/// For hosts that already deliver pointer events globally while a button is held.
#[derive(Debug, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn capture(&mut self) {}
    fn release(&mut self) {}
}

/// Tracks a drag across the picker panels.
///
/// Any capture still held when this is dropped is released.
pub struct PickerDrag<C: PointerCapture> {
    state: DragState,
    capture: C,
}

impl<C: PointerCapture> PickerDrag<C> {
    pub fn new(capture: C) -> Self {
        Self { state: DragState::Idle, capture }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Begin a drag if `position` lies on the panel. Returns the color under the pointer.
    pub fn pointer_down(
        &mut self,
        surface: PickerSurface,
        bounds: Rect,
        position: Point,
    ) -> Option<Hsv> {
        if !within(bounds, position) {
            return None;
        }

        if !self.is_dragging() {
            self.capture.capture();
        }
        self.state = DragState::Dragging { surface, bounds };
        Some(pointer_to_hsv(bounds.size(), position - bounds.origin().to_vec2()))
    }

    /// Report the color under the pointer while dragging.
    pub fn pointer_move(&mut self, position: Point) -> Option<(PickerSurface, Hsv)> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { surface, bounds } => Some((
                surface,
                pointer_to_hsv(bounds.size(), position - bounds.origin().to_vec2()),
            )),
        }
    }

    /// End any drag, wherever the pointer was released.
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            self.capture.release();
        }
        self.state = DragState::Idle;
    }
}

impl<C: PointerCapture> Drop for PickerDrag<C> {
    fn drop(&mut self) {
        self.pointer_up();
    }
}

// Inclusive of the far edges, unlike `Rect::contains`.
fn within(bounds: Rect, position: Point) -> bool {
    position.x >= bounds.x0
        && position.x <= bounds.x1
        && position.y >= bounds.y0
        && position.y <= bounds.y1
}
