//! Step-count slider.

use egui::{RichText, Slider, Ui};
use huestep_core::STEPS_SLIDER_PRECISION;
use huestep_core::steps::slider_position_from_steps;

use crate::palette;

/// Vertical slider over the raw position range `[0, STEPS_SLIDER_PRECISION]`.
///
/// The thumb sits at the position of the current step count on the step
/// curve, so the low counts get most of the travel.
pub struct StepsSlider {
    steps: u32,
    height: f32,
}

impl StepsSlider {
    pub fn new(steps: u32) -> Self {
        Self { steps, height: 160.0 }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show the slider. Returns the raw position when the user moved it.
    pub fn show(self, ui: &mut Ui) -> Option<u32> {
        let palette = palette(ui.ctx());
        let mut position = slider_position_from_steps(self.steps);
        let mut moved = false;

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(self.steps.to_string()).strong().color(palette.text));
            ui.spacing_mut().slider_width = self.height;
            let response = ui
                .add(
                    Slider::new(&mut position, 0..=STEPS_SLIDER_PRECISION)
                        .vertical()
                        .show_value(false),
                )
                .on_hover_text(format!("{} steps", self.steps));
            moved = response.changed();
            ui.label(RichText::new("steps").size(10.0).color(palette.text_muted));
        });

        moved.then_some(position)
    }
}
