//! Ping-pong animation between the start and end color.

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Time to travel from the start color to the end color.
pub const ANIMATION_HALF_CYCLE: Duration = Duration::from_secs(2);

/// What the swatch strip shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// One swatch per step.
    #[default]
    Static,
    /// A single swatch oscillating between the endpoints.
    Animation,
}

/// Progress in `[0, 1]` of a ping-pong cycle after `elapsed`.
///
/// Rises from 0 to 1 over `half_cycle`, then falls back to 0 over the next.
pub fn ping_pong_progress(elapsed: Duration, half_cycle: Duration) -> f64 {
    let half = half_cycle.as_secs_f64();
    if half <= 0.0 {
        return 0.0;
    }

    let mut progress = elapsed.as_secs_f64() % (2.0 * half);
    if progress > half {
        progress = 2.0 * half - progress;
    }
    progress / half
}

/// Handle for one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host per-frame callback service.
pub trait FrameScheduler {
    /// Ask for one frame callback.
    fn request_frame(&mut self) -> FrameHandle;
    /// Withdraw a frame that has not fired yet.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// The animation task.
///
/// At most one frame request is outstanding at any time. Starting a running
/// loop or cancelling a stopped one does nothing. Dropping the loop cancels
/// its pending frame.
pub struct AnimationLoop<S: FrameScheduler> {
    scheduler: S,
    half_cycle: Duration,
    started_at: Option<Instant>,
    pending: Option<FrameHandle>,
}

impl<S: FrameScheduler> AnimationLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_half_cycle(scheduler, ANIMATION_HALF_CYCLE)
    }

    pub fn with_half_cycle(scheduler: S, half_cycle: Duration) -> Self {
        Self {
            scheduler,
            half_cycle,
            started_at: None,
            pending: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        log::debug!("Starting color animation");
        self.started_at = Some(now);
        self.pending = Some(self.scheduler.request_frame());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.started_at.take().is_some() {
            log::debug!("Stopped color animation");
        }
    }

    /// Start or stop to match the display mode.
    pub fn sync_mode(&mut self, mode: DisplayMode, now: Instant) {
        match mode {
            DisplayMode::Animation => self.start(now),
            DisplayMode::Static => self.cancel(),
        }
    }

    /// Handle a frame callback: returns the progress and schedules the next frame.
    pub fn on_frame(&mut self, now: Instant) -> Option<f64> {
        let started_at = self.started_at?;
        self.pending = Some(self.scheduler.request_frame());
        Some(ping_pong_progress(
            now.saturating_duration_since(started_at),
            self.half_cycle,
        ))
    }

    /// Current progress without consuming a frame.
    pub fn progress(&self, now: Instant) -> Option<f64> {
        self.started_at.map(|started_at| {
            ping_pong_progress(now.saturating_duration_since(started_at), self.half_cycle)
        })
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: FrameScheduler> Drop for AnimationLoop<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
