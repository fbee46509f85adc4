//! Gradient resolution.
//!
//! A gradient of `n` steps is `n` mix requests at evenly spaced
//! percentages between the start color (0%) and the end color (100%).
//! The actual color-space math is delegated to a [`ColorMixer`].

mod native;

pub use native::PenikoMixer;

use crate::color::Rgb;
use crate::space::ColorSpace;
use crate::steps::clamp_steps;

/// A color-mixing capability.
///
/// Mixes `end` into `start` by `percent` (0 to 100) within `space`, the
/// way CSS `color-mix(in <space>, start, end <percent>%)` does, and samples
/// the result to 8-bit sRGB. Returns `None` when the capability cannot
/// produce a color (unparsable input, backend unavailable).
pub trait ColorMixer {
    fn mix(&self, space: ColorSpace, start: &str, end: &str, percent: f64) -> Option<Rgb>;
}

/// Mix percentages for a gradient of `steps` swatches.
///
/// One step samples only 0%. Otherwise the percentages run from 0 to 100
/// inclusive in equal increments.
pub fn mix_percentages(steps: u32) -> Vec<f64> {
    let steps = clamp_steps(steps);
    if steps == 1 {
        return vec![0.0];
    }
    let last = f64::from(steps - 1);
    (0..steps).map(|i| f64::from(i) / last * 100.0).collect()
}

/// Resolve a gradient to `"#RRGGBB"` strings, one per step.
///
/// Returns an empty list if the mixer cannot resolve any of the samples;
/// callers treat that as nothing to display.
pub fn resolve_color_mix<M: ColorMixer + ?Sized>(
    mixer: &M,
    start: &str,
    end: &str,
    steps: u32,
    space: ColorSpace,
) -> Vec<String> {
    let percentages = mix_percentages(steps);
    let mut resolved = Vec::with_capacity(percentages.len());

    for percent in percentages {
        match mixer.mix(space, start, end, percent) {
            Some(rgb) => resolved.push(rgb.to_hex()),
            None => {
                log::debug!(
                    "color-mix in {} of {} and {} at {}% unavailable",
                    space,
                    start,
                    end,
                    percent
                );
                return Vec::new();
            }
        }
    }

    resolved
}

/// Resolve a single mix, e.g. the current frame of the animation.
pub fn mix_at<M: ColorMixer + ?Sized>(
    mixer: &M,
    start: &str,
    end: &str,
    space: ColorSpace,
    percent: f64,
) -> Option<String> {
    mixer
        .mix(space, start, end, percent.clamp(0.0, 100.0))
        .map(Rgb::to_hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every request and answers with a fixed color.
    struct RecordingMixer {
        requests: RefCell<Vec<f64>>,
    }

    impl ColorMixer for RecordingMixer {
        fn mix(&self, _space: ColorSpace, _start: &str, _end: &str, percent: f64) -> Option<Rgb> {
            self.requests.borrow_mut().push(percent);
            Some(Rgb::BLACK)
        }
    }

    struct UnavailableMixer;

    impl ColorMixer for UnavailableMixer {
        fn mix(&self, _: ColorSpace, _: &str, _: &str, _: f64) -> Option<Rgb> {
            None
        }
    }

    #[test]
    fn test_single_step_samples_zero() {
        assert_eq!(mix_percentages(1), vec![0.0]);
    }

    #[test]
    fn test_percentages_span_zero_to_hundred() {
        assert_eq!(mix_percentages(3), vec![0.0, 50.0, 100.0]);
        assert_eq!(mix_percentages(5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_percentages_strictly_increasing() {
        for steps in 2..=50 {
            let percentages = mix_percentages(steps);
            assert_eq!(percentages.len(), steps as usize);
            assert_eq!(percentages[0], 0.0);
            assert_eq!(*percentages.last().unwrap(), 100.0);
            assert!(percentages.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_out_of_range_steps_are_clamped() {
        assert_eq!(mix_percentages(0).len(), 1);
        assert_eq!(mix_percentages(80).len(), 50);
    }

    #[test]
    fn test_resolver_issues_one_request_per_step() {
        let mixer = RecordingMixer { requests: RefCell::new(Vec::new()) };
        let colors = resolve_color_mix(&mixer, "#000", "#fff", 4, ColorSpace::Lab);

        assert_eq!(colors.len(), 4);
        let requests = mixer.requests.borrow();
        assert_eq!(requests.len(), 4);
        assert!((requests[1] - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(requests[3], 100.0);
    }

    #[test]
    fn test_unavailable_mixer_yields_empty() {
        let colors =
            resolve_color_mix(&UnavailableMixer, "#0000ff", "#ff0000", 10, ColorSpace::Srgb);
        assert!(colors.is_empty());
        assert_eq!(mix_at(&UnavailableMixer, "#0000ff", "#ff0000", ColorSpace::Srgb, 50.0), None);
    }

    #[test]
    fn test_mix_at_clamps_percent() {
        let mixer = RecordingMixer { requests: RefCell::new(Vec::new()) };
        mix_at(&mixer, "#000", "#fff", ColorSpace::Srgb, 140.0);
        mix_at(&mixer, "#000", "#fff", ColorSpace::Srgb, -3.0);
        assert_eq!(*mixer.requests.borrow(), vec![100.0, 0.0]);
    }
}
