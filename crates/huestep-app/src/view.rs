//! Per-entity view state and rendering.

use egui::{Id, RichText, Ui};
use huestep_core::{
    AnimationLoop, ColorMixer, CopyFeedback, DisplayMode, EntityAction, EntityState, NoCapture,
    PickerDrag, PickerSurface, all_hex_text, mix_at, resolve_color_mix, selected_label,
};
use huestep_widgets::{
    AnimatedSwatch, ColorEditor, ColorEditorState, CopyField, SpaceSelector, StepsSlider,
    SwatchStrip, palette, panel_frame, text_button, toggle_button,
};

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

use crate::clipboard::PlatformClipboard;
use crate::frame::RepaintScheduler;

/// How long a removed entity takes to fade out.
pub const EXIT_DURATION: Duration = Duration::from_millis(200);

/// UI-side state of one entity that is not part of [`EntityState`].
pub struct EntityView {
    start_editor: ColorEditorState,
    end_editor: ColorEditorState,
    drag: PickerDrag<NoCapture>,
    animation: AnimationLoop<RepaintScheduler>,
    all_feedback: CopyFeedback,
    selected_feedback: CopyFeedback,
    // Resolved swatches keyed by configuration
    resolved: Option<(String, Vec<String>)>,
    exit_started: Option<Instant>,
}

/// What the user asked for this frame.
#[derive(Debug, Default)]
pub struct ViewResponse {
    pub actions: Vec<EntityAction>,
    pub remove: bool,
}

impl EntityView {
    pub fn new(ctx: &egui::Context, state: &EntityState) -> Self {
        Self {
            start_editor: ColorEditorState::new(&state.start_color),
            end_editor: ColorEditorState::new(&state.end_color),
            drag: PickerDrag::new(NoCapture),
            animation: AnimationLoop::new(RepaintScheduler::new(ctx.clone())),
            all_feedback: CopyFeedback::new(),
            selected_feedback: CopyFeedback::new(),
            resolved: None,
            exit_started: None,
        }
    }

    /// Start the exit fade. Stops the animation and any drag.
    pub fn begin_exit(&mut self, now: Instant) {
        self.animation.cancel();
        self.drag.pointer_up();
        self.exit_started.get_or_insert(now);
    }

    /// Fade progress in `[0, 1]`, or `None` if not leaving.
    pub fn exit_progress(&self, now: Instant) -> Option<f32> {
        self.exit_started.map(|started| {
            let elapsed = now.saturating_duration_since(started).as_secs_f32();
            (elapsed / EXIT_DURATION.as_secs_f32()).min(1.0)
        })
    }

    fn swatches<M: ColorMixer + ?Sized>(&mut self, mixer: &M, state: &EntityState) -> &[String] {
        let key = state.config_key();
        let stale = !matches!(&self.resolved, Some((cached, _)) if *cached == key);
        if stale {
            let colors = resolve_color_mix(
                mixer,
                &state.start_color,
                &state.end_color,
                state.steps,
                state.color_space,
            );
            self.resolved = Some((key, colors));
        }
        match &self.resolved {
            Some((_, colors)) => colors,
            None => &[],
        }
    }

    /// The animated swatch color for this frame, if animating.
    fn animated_color<M: ColorMixer + ?Sized>(
        &mut self,
        mixer: &M,
        state: &EntityState,
        now: Instant,
    ) -> Option<String> {
        if self.exit_started.is_some() {
            return None;
        }
        self.animation.sync_mode(state.mode, now);
        let progress = self.animation.on_frame(now)?;
        mix_at(
            mixer,
            &state.start_color,
            &state.end_color,
            state.color_space,
            progress * 100.0,
        )
    }

    /// Full editor: pickers, slider, selector, strip and output fields.
    #[allow(clippy::too_many_arguments)]
    pub fn show<M: ColorMixer + ?Sized>(
        &mut self,
        ui: &mut Ui,
        id: Id,
        state: &EntityState,
        mixer: &M,
        clipboard: &mut PlatformClipboard,
        can_remove: bool,
        now: Instant,
    ) -> ViewResponse {
        let palette = palette(ui.ctx());
        let mut response = ViewResponse::default();

        panel_frame(&palette).show(ui, |ui| {
            ui.horizontal(|ui| {
                if let Some(space) = SpaceSelector::new(state.color_space).show(ui) {
                    response.actions.push(EntityAction::SetColorSpace(space));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if text_button(ui, "Remove", can_remove).clicked() {
                        response.remove = true;
                    }
                    let animating = state.mode == DisplayMode::Animation;
                    if toggle_button(ui, "Animate", animating).clicked() {
                        let mode = if animating {
                            DisplayMode::Static
                        } else {
                            DisplayMode::Animation
                        };
                        response.actions.push(EntityAction::SetMode(mode));
                    }
                    if text_button(ui, "Swap", true).clicked() {
                        response.actions.push(EntityAction::Swap);
                    }
                });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if let Some(color) = ColorEditor::new(
                    "Start",
                    PickerSurface::Start,
                    &state.start_color,
                    &mut self.start_editor,
                    &mut self.drag,
                )
                .show(ui)
                {
                    response.actions.push(EntityAction::SetStart(color));
                }
                ui.add_space(12.0);
                if let Some(color) = ColorEditor::new(
                    "End",
                    PickerSurface::End,
                    &state.end_color,
                    &mut self.end_editor,
                    &mut self.drag,
                )
                .show(ui)
                {
                    response.actions.push(EntityAction::SetEnd(color));
                }
                ui.add_space(12.0);
                if let Some(position) = StepsSlider::new(state.steps).show(ui) {
                    response.actions.push(EntityAction::SetStepsFromSlider(position));
                }
            });

            ui.add_space(8.0);
            response.actions.extend(self.show_strip(ui, state, mixer, false, now));

            ui.add_space(8.0);
            let colors = self.swatches(mixer, state).to_vec();
            let all = all_hex_text(&colors);
            CopyField::new(id.with("all"), "All", &all, &mut self.all_feedback).show(ui, clipboard);

            let selection = state.active_selection();
            let label = selected_label(selection.map(|selection| selection.index));
            let value = selection.map(|selection| selection.color.as_str()).unwrap_or("");
            CopyField::new(id.with("selected"), &label, value, &mut self.selected_feedback)
                .show(ui, clipboard);
        });

        response
    }

    /// Display-only row: a summary line and a strip that ignores clicks.
    pub fn show_compact<M: ColorMixer + ?Sized>(
        &mut self,
        ui: &mut Ui,
        state: &EntityState,
        mixer: &M,
        now: Instant,
    ) {
        let palette = palette(ui.ctx());

        panel_frame(&palette).show(ui, |ui| {
            ui.label(
                RichText::new(format!(
                    "{} → {} in {} · {} steps",
                    state.start_color,
                    state.end_color,
                    state.color_space.label(),
                    state.steps
                ))
                .monospace()
                .size(11.0)
                .color(palette.text_muted),
            );
            self.show_strip(ui, state, mixer, true, now);
        });
    }

    fn show_strip<M: ColorMixer + ?Sized>(
        &mut self,
        ui: &mut Ui,
        state: &EntityState,
        mixer: &M,
        compact: bool,
        now: Instant,
    ) -> Option<EntityAction> {
        match state.mode {
            DisplayMode::Animation => {
                let color = self.animated_color(mixer, state, now);
                let swatch = AnimatedSwatch::new(color.as_deref());
                let swatch = if compact { swatch.compact() } else { swatch };
                swatch.show(ui);
                None
            }
            DisplayMode::Static => {
                if self.exit_started.is_none() {
                    self.animation.sync_mode(state.mode, now);
                }
                let selected = state.active_selection().map(|selection| selection.index);
                let colors = self.swatches(mixer, state);
                let strip = SwatchStrip::new(colors).selected(selected);
                let strip = if compact {
                    strip.compact().display_only()
                } else {
                    strip
                };
                strip
                    .show(ui)
                    .map(|(index, color)| EntityAction::SelectSwatch { index, color })
            }
        }
    }
}
