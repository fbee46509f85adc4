//! Copying swatch values to the system clipboard.

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// How long the "Copied!" confirmation stays on screen.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Clipboard errors.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Something text can be written to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Result of a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing to copy.
    Empty,
    Copied,
    /// The clipboard refused the write; the field should select its own
    /// text so the user can copy by hand.
    SelectInPlace,
}

/// Write `value` to the clipboard.
pub fn copy_text<C: Clipboard + ?Sized>(clipboard: &mut C, value: &str) -> CopyOutcome {
    if value.is_empty() {
        return CopyOutcome::Empty;
    }

    match clipboard.write_text(value) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            log::warn!("Copy failed, falling back to text selection: {}", e);
            CopyOutcome::SelectInPlace
        }
    }
}

/// All swatch hex values as one comma-separated string.
pub fn all_hex_text(colors: &[String]) -> String {
    colors.join(", ")
}

/// Label of the selected-color output field.
pub fn selected_label(index: Option<usize>) -> String {
    match index {
        Some(index) => format!("Selected: {}", index),
        None => "Selected".to_string(),
    }
}

/// Transient "Copied!" state of one output field.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a copy outcome. Only a successful copy shows feedback.
    pub fn record(&mut self, outcome: CopyOutcome, now: Instant) {
        if outcome == CopyOutcome::Copied {
            self.copied_at = Some(now);
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Time left before the feedback hides.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let copied_at = self.copied_at?;
        COPY_FEEDBACK_DURATION
            .checked_sub(now.saturating_duration_since(copied_at))
            .filter(|left| !left.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        writes: usize,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes += 1;
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("permission denied".to_string()))
        }
    }

    #[test]
    fn test_copy_writes_value() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(copy_text(&mut clipboard, "#FF0000"), CopyOutcome::Copied);
        assert_eq!(clipboard.contents.as_deref(), Some("#FF0000"));
    }

    #[test]
    fn test_empty_value_is_not_copied() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(copy_text(&mut clipboard, ""), CopyOutcome::Empty);
        assert_eq!(clipboard.writes, 0);
    }

    #[test]
    fn test_failed_copy_selects_in_place() {
        assert_eq!(copy_text(&mut DeniedClipboard, "#FF0000"), CopyOutcome::SelectInPlace);
    }

    #[test]
    fn test_all_hex_text() {
        let colors = vec!["#0000FF".to_string(), "#800080".to_string(), "#FF0000".to_string()];
        assert_eq!(all_hex_text(&colors), "#0000FF, #800080, #FF0000");
        assert_eq!(all_hex_text(&[]), "");
    }

    #[test]
    fn test_selected_label() {
        assert_eq!(selected_label(Some(4)), "Selected: 4");
        assert_eq!(selected_label(None), "Selected");
    }

    #[test]
    fn test_feedback_expires() {
        let now = Instant::now();
        let mut feedback = CopyFeedback::new();
        assert!(!feedback.is_visible(now));

        feedback.record(CopyOutcome::SelectInPlace, now);
        assert!(!feedback.is_visible(now));

        feedback.record(CopyOutcome::Copied, now);
        assert!(feedback.is_visible(now + Duration::from_millis(1_999)));
        assert!(!feedback.is_visible(now + COPY_FEEDBACK_DURATION));
    }

    #[test]
    fn test_second_copy_restarts_feedback() {
        let now = Instant::now();
        let mut feedback = CopyFeedback::new();
        feedback.record(CopyOutcome::Copied, now);
        feedback.record(CopyOutcome::Copied, now + Duration::from_secs(1));
        assert!(feedback.is_visible(now + Duration::from_millis(2_500)));
    }
}
