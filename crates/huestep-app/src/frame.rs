//! Frame callbacks on top of egui repaint requests.

use huestep_core::{FrameHandle, FrameScheduler};

/// Schedules animation frames by asking egui for a repaint.
///
/// egui cannot withdraw a repaint it was asked for, so cancelling only
/// forgets the handle. The frame still arrives and finds nothing to do.
pub struct RepaintScheduler {
    ctx: egui::Context,
    next: u64,
    pending: Option<FrameHandle>,
}

impl RepaintScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next: 0,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }
}

impl FrameScheduler for RepaintScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending = Some(handle);
        self.ctx.request_repaint();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
