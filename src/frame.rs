//! Frame pacing
//!
//! The game advances one tick per frame, so the frame rate is the game
//! speed. `FrameLimiter` caps it at a fixed target.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameLimiter {
    delay: Duration,
    next: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(delay: Duration) -> Self {
        Self { delay, next: None }
    }

    /// When the next frame may start (`None` before the first frame)
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_none_or(|next| now >= next)
    }

    /// Record a finished frame and schedule the next one.
    ///
    /// Deadlines step by exactly one delay. A frame that ran long does not
    /// earn a burst of catch-up frames; the schedule restarts from `now`.
    pub fn frame_done(&mut self, now: Instant) -> Instant {
        let next = match self.next {
            Some(prev) if prev + self.delay > now => prev + self.delay,
            _ => now + self.delay,
        };
        self.next = Some(next);
        next
    }
}

/// Wall-clock time since the run started
#[derive(Debug, Clone, Copy)]
pub struct RunClock {
    start: Instant,
}

impl RunClock {
    pub fn start(now: Instant) -> Self {
        Self { start: now }
    }

    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.start).as_millis() as u64
    }
}
