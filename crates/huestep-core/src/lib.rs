//! Huestep Core Library
//!
//! Platform-agnostic color conversion, gradient resolution, picker math and
//! entity state for the huestep color-space interpolation tool.

pub mod animation;
pub mod clipboard;
pub mod color;
pub mod entity;
pub mod field;
pub mod mix;
pub mod picker;
pub mod space;
pub mod steps;
pub mod storage;
pub mod theme;

pub use animation::{AnimationLoop, DisplayMode, FrameHandle, FrameScheduler, ping_pong_progress};
pub use clipboard::{
    Clipboard, ClipboardError, CopyFeedback, CopyOutcome, all_hex_text, copy_text, selected_label,
};
pub use color::{
    Hsv, Rgb, hex_to_rgb, hsv_to_hex, hsv_to_rgb, normalize_hex, normalize_rgb_input, rgb_to_hex,
    rgb_to_hsv,
};
pub use entity::{
    EntityAction, EntityDefaults, EntityId, EntityList, EntityState, MAX_ENTITIES, MIN_ENTITIES,
};
pub use field::{HexField, RgbField};
pub use mix::{ColorMixer, PenikoMixer, mix_at, resolve_color_mix};
pub use picker::{
    DragState, NoCapture, PickerDrag, PickerSurface, PointerCapture, hsv_to_pointer,
    pointer_to_hsv,
};
pub use space::{ColorSpace, NavKey};
pub use steps::{STEPS_MAX, STEPS_MIN, STEPS_SLIDER_PRECISION};
pub use theme::{Theme, ThemePreference};
