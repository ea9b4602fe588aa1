//! Fixed-rate frame pacing shared by rendering backends.

use std::time::Duration;

/// Whether the frame loop should keep going after the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    /// Keep presenting frames.
    #[default]
    Running,
    /// Present the current frame and stop.
    Stopped,
}

impl LoopState {
    /// Reports whether the loop has been asked to stop.
    #[must_use]
    pub const fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

/// Computes how long to sleep so frames start at a fixed rate.
///
/// Late frames are not compensated: the next frame simply starts immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePacer {
    budget: Duration,
}

impl FramePacer {
    /// Creates a pacer targeting the provided number of frames per second.
    ///
    /// A rate of zero disables pacing.
    #[must_use]
    pub fn new(frames_per_second: u32) -> Self {
        let budget = if frames_per_second == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / frames_per_second
        };
        Self { budget }
    }

    /// Time left in the budget after a frame took `elapsed` to produce.
    #[must_use]
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }
}
