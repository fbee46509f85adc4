//! Non-linear mapping between the steps slider and the step count.
//!
//! The slider runs over `0..=STEPS_SLIDER_PRECISION` and is bent by a power
//! curve so that most of its travel covers small step counts.

pub const STEPS_MIN: u32 = 1;
pub const STEPS_MAX: u32 = 50;
pub const STEPS_SLIDER_PRECISION: u32 = 1000;
pub const STEPS_EXPONENT: f64 = 2.45;

/// Clamp a step count into `[STEPS_MIN, STEPS_MAX]`.
pub fn clamp_steps(steps: u32) -> u32 {
    steps.clamp(STEPS_MIN, STEPS_MAX)
}

/// Map a raw slider position to a step count.
pub fn steps_from_slider_position(position: u32) -> u32 {
    let clamped = position.min(STEPS_SLIDER_PRECISION);
    let normalized = f64::from(clamped) / f64::from(STEPS_SLIDER_PRECISION);
    let curved = normalized.powf(STEPS_EXPONENT);
    let mapped = f64::from(STEPS_MIN) + f64::from(STEPS_MAX - STEPS_MIN) * curved;
    mapped.round() as u32
}

/// Map a step count back to the slider position that displays it.
pub fn slider_position_from_steps(steps: u32) -> u32 {
    let clamped = clamp_steps(steps);
    let normalized = f64::from(clamped - STEPS_MIN) / f64::from(STEPS_MAX - STEPS_MIN);
    let inverse_curved = normalized.powf(1.0 / STEPS_EXPONENT);
    (inverse_curved * f64::from(STEPS_SLIDER_PRECISION)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_endpoints() {
        assert_eq!(steps_from_slider_position(0), STEPS_MIN);
        assert_eq!(steps_from_slider_position(STEPS_SLIDER_PRECISION), STEPS_MAX);
        assert_eq!(slider_position_from_steps(STEPS_MIN), 0);
        assert_eq!(slider_position_from_steps(STEPS_MAX), STEPS_SLIDER_PRECISION);
    }

    #[test]
    fn test_slider_clamps() {
        assert_eq!(steps_from_slider_position(5000), STEPS_MAX);
        assert_eq!(slider_position_from_steps(0), 0);
        assert_eq!(slider_position_from_steps(999), STEPS_SLIDER_PRECISION);
    }

    #[test]
    fn test_round_trip_all_step_counts() {
        for steps in STEPS_MIN..=STEPS_MAX {
            let position = slider_position_from_steps(steps);
            assert_eq!(steps_from_slider_position(position), steps, "steps {steps}");
        }
    }

    #[test]
    fn test_curve_favors_small_counts() {
        // Half the slider travel covers well under half the range
        let midpoint = steps_from_slider_position(STEPS_SLIDER_PRECISION / 2);
        assert!(midpoint < 15, "midpoint maps to {midpoint}");
    }

    #[test]
    fn test_forward_is_monotonic() {
        let mut previous = 0;
        for position in 0..=STEPS_SLIDER_PRECISION {
            let steps = steps_from_slider_position(position);
            assert!(steps >= previous);
            previous = steps;
        }
    }
}
