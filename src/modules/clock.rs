use std::time::{Duration, Instant};

/// Cycles the shared frame index on a fixed wall clock interval, however
/// often it gets polled.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    current_frame: usize,
    frame_count: usize,
    last_advance: Instant,
    frame_duration: Duration,
}

impl AnimationClock {
    pub fn new(frame_count: usize, frame_duration: Duration, now: Instant) -> Self {
        Self {
            current_frame: 0,
            frame_count: frame_count.max(1),
            last_advance: now,
            frame_duration,
        }
    }

    /// Advances by one frame if a full interval went by since the last advance.
    ///
    /// Returns true if the frame changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_advance) < self.frame_duration {
            return false;
        }

        self.current_frame = (self.current_frame + 1) % self.frame_count;
        self.last_advance = now;

        true
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }
}
