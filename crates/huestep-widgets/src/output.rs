//! Read-only output fields with a copy button.

use egui::text::CCursor;
use egui::text_edit::TextEditState;
use egui::text_selection::CCursorRange;
use egui::{FontId, Id, TextEdit, Ui};
use huestep_core::{Clipboard, CopyFeedback, CopyOutcome, copy_text};

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use crate::{section_label, text_button};

/// A labelled, selectable value with a copy button.
///
/// A failed copy selects the whole value in the field so the user can
/// copy it by hand.
pub struct CopyField<'a> {
    id: Id,
    label: &'a str,
    value: &'a str,
    feedback: &'a mut CopyFeedback,
}

impl<'a> CopyField<'a> {
    pub fn new(id: Id, label: &'a str, value: &'a str, feedback: &'a mut CopyFeedback) -> Self {
        Self {
            id,
            label,
            value,
            feedback,
        }
    }

    pub fn show<C: Clipboard + ?Sized>(
        self,
        ui: &mut Ui,
        clipboard: &mut C,
    ) -> Option<CopyOutcome> {
        let now = Instant::now();
        let mut outcome = None;

        ui.vertical(|ui| {
            section_label(ui, self.label);
            ui.horizontal(|ui| {
                let copy_label = if self.feedback.is_visible(now) {
                    "Copied!"
                } else {
                    "Copy"
                };
                let copy = text_button(ui, copy_label, !self.value.is_empty());

                let text_id = self.id.with("text");
                let mut text = self.value;
                ui.add(
                    TextEdit::singleline(&mut text)
                        .id(text_id)
                        .font(FontId::monospace(12.0))
                        .desired_width(f32::INFINITY),
                );

                if copy.clicked() {
                    let result = copy_text(clipboard, self.value);
                    self.feedback.record(result, now);
                    if result == CopyOutcome::SelectInPlace {
                        select_all(ui, text_id, self.value);
                    }
                    outcome = Some(result);
                }
            });
        });

        if let Some(remaining) = self.feedback.remaining(now) {
            ui.ctx().request_repaint_after(remaining);
        }
        outcome
    }
}

fn select_all(ui: &Ui, id: Id, value: &str) {
    let mut state = TextEditState::load(ui.ctx(), id).unwrap_or_default();
    state.cursor.set_char_range(Some(CCursorRange::two(
        CCursor::new(0),
        CCursor::new(value.chars().count()),
    )));
    state.store(ui.ctx(), id);
    ui.memory_mut(|memory| memory.request_focus(id));
}
