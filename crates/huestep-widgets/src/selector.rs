//! Color-space radio group.

use egui::{FocusDirection, Id, Key, Modifiers, Ui, WidgetInfo, WidgetType};
use huestep_core::{ColorSpace, NavKey};

use crate::toggle_button;

const NAV_KEYS: [(Key, NavKey); 6] = [
    (Key::ArrowDown, NavKey::Next),
    (Key::ArrowRight, NavKey::Next),
    (Key::ArrowUp, NavKey::Previous),
    (Key::ArrowLeft, NavKey::Previous),
    (Key::Home, NavKey::First),
    (Key::End, NavKey::Last),
];

/// One toggle per color space. While any entry has keyboard focus, arrow
/// keys move the selection cyclically and Home/End jump to the ends;
/// Space/Enter select the focused entry.
pub struct SpaceSelector {
    current: ColorSpace,
}

impl SpaceSelector {
    pub fn new(current: ColorSpace) -> Self {
        Self { current }
    }

    /// Show the group. Returns the newly selected color space.
    pub fn show(self, ui: &mut Ui) -> Option<ColorSpace> {
        let mut ids: Vec<Id> = Vec::with_capacity(ColorSpace::ALL.len());
        let mut chosen = None;
        let mut focused = false;

        ui.horizontal_wrapped(|ui| {
            for space in ColorSpace::ALL {
                let selected = space == self.current;
                let response = toggle_button(ui, space.label(), selected);
                response.widget_info(|| {
                    WidgetInfo::selected(WidgetType::RadioButton, true, selected, space.label())
                });
                focused |= response.has_focus();
                if response.clicked() {
                    chosen = Some(space);
                }
                ids.push(response.id);
            }
        });

        if focused {
            let nav = ui.input_mut(|input| {
                NAV_KEYS
                    .into_iter()
                    .find(|&(key, _)| input.consume_key(Modifiers::NONE, key))
                    .map(|(_, nav)| nav)
            });
            if let Some(nav) = nav {
                let next = self.current.navigate(nav);
                if let Some(&id) = ids.get(next.index()) {
                    ui.memory_mut(|memory| {
                        // Arrow keys also queue egui's spatial focus move
                        memory.move_focus(FocusDirection::None);
                        memory.request_focus(id);
                    });
                }
                chosen = Some(next);
            }
        }

        chosen.filter(|space| *space != self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install_palette;
    use egui::{CentralPanel, Context, Event, Pos2, RawInput, Rect, vec2};
    use huestep_core::Theme;

    fn key(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn frame(ctx: &Context, current: ColorSpace, events: Vec<Event>) -> Option<ColorSpace> {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let mut picked = None;
        let _ = ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                // A discarded pass reruns without events, so keep the first answer
                if let Some(space) = SpaceSelector::new(current).show(ui) {
                    picked = Some(space);
                }
            });
        });
        picked
    }

    /// A context whose first selector entry has keyboard focus.
    fn focused_context(current: ColorSpace) -> Context {
        let ctx = Context::default();
        install_palette(&ctx, Theme::Dark);
        assert_eq!(frame(&ctx, current, vec![key(Key::Tab)]), None);
        ctx
    }

    #[test]
    fn test_end_then_arrow_down_wraps_to_first() {
        let ctx = focused_context(ColorSpace::Srgb);
        assert_eq!(
            frame(&ctx, ColorSpace::Srgb, vec![key(Key::End)]),
            Some(ColorSpace::Oklab)
        );
        assert_eq!(
            frame(&ctx, ColorSpace::Oklab, vec![key(Key::ArrowDown)]),
            Some(ColorSpace::Srgb)
        );
    }

    #[test]
    fn test_arrow_up_from_first_wraps_to_last() {
        let ctx = focused_context(ColorSpace::Srgb);
        assert_eq!(
            frame(&ctx, ColorSpace::Srgb, vec![key(Key::ArrowUp)]),
            Some(ColorSpace::Oklab)
        );
    }

    #[test]
    fn test_arrow_right_and_left_step() {
        let ctx = focused_context(ColorSpace::Srgb);
        assert_eq!(
            frame(&ctx, ColorSpace::Srgb, vec![key(Key::ArrowRight)]),
            Some(ColorSpace::Hsl)
        );
        assert_eq!(
            frame(&ctx, ColorSpace::Hsl, vec![key(Key::ArrowLeft)]),
            Some(ColorSpace::Srgb)
        );
    }

    #[test]
    fn test_home_jumps_to_first() {
        let ctx = focused_context(ColorSpace::Lab);
        assert_eq!(
            frame(&ctx, ColorSpace::Lab, vec![key(Key::Home)]),
            Some(ColorSpace::Srgb)
        );
        // Already first: no change to report
        assert_eq!(frame(&ctx, ColorSpace::Srgb, vec![key(Key::Home)]), None);
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let ctx = Context::default();
        install_palette(&ctx, Theme::Dark);
        assert_eq!(frame(&ctx, ColorSpace::Hwb, vec![key(Key::ArrowDown)]), None);
    }
}
