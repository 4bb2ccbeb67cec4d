//! Shared utilities

use std::time::{Duration, Instant};

// ============================================================================
// FPS Snapshot
// ============================================================================

/// Frame-rate counter with once-per-interval snapshot semantics.
///
/// Frames are counted into the current measurement window; when a tick
/// lands on or past the one-second boundary, the finished window's count
/// becomes the displayed value and the counter starts over. This is a
/// plain snapshot, not a rolling average - the displayed number changes
/// at most once per interval.
pub struct FpsSnapshot {
    window_start: Instant,
    frames: u32,
    fps: u32,
}

impl FpsSnapshot {
    /// Measurement window length
    const INTERVAL: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(start: Instant) -> Self {
        Self {
            window_start: start,
            frames: 0,
            fps: 0,
        }
    }

    /// Count one frame; returns the FPS value to display
    pub fn tick(&mut self) -> u32 {
        self.tick_at(Instant::now())
    }

    /// Count one frame against an explicit clock reading.
    ///
    /// The boundary check runs before the frame is counted: a tick that
    /// crosses the interval publishes the completed window's count and its
    /// own frame opens the next window.
    pub fn tick_at(&mut self, now: Instant) -> u32 {
        if now.duration_since(self.window_start) >= Self::INTERVAL {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = now;
        }
        self.frames += 1;
        self.fps
    }

    /// Last snapshotted frames-per-second value
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

impl Default for FpsSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_publishes_at_interval_boundary() {
        let t0 = Instant::now();
        let mut counter = FpsSnapshot::starting_at(t0);

        // 30 frames spread inside the first window: nothing published yet
        for i in 0u64..30 {
            let shown = counter.tick_at(t0 + Duration::from_millis(i * 30));
            assert_eq!(shown, 0);
        }

        // Boundary crossing publishes the finished window and resets
        let shown = counter.tick_at(t0 + Duration::from_secs(1));
        assert_eq!(shown, 30);
        assert_eq!(counter.fps(), 30);
        assert_eq!(counter.frames, 1); // the crossing frame opened the next window
    }

    #[test]
    fn test_snapshot_holds_between_boundaries() {
        let t0 = Instant::now();
        let mut counter = FpsSnapshot::starting_at(t0);

        for i in 0u64..30 {
            counter.tick_at(t0 + Duration::from_millis(i * 30));
        }
        counter.tick_at(t0 + Duration::from_secs(1));

        // Mid-window ticks keep showing the last snapshot
        let shown = counter.tick_at(t0 + Duration::from_millis(1500));
        assert_eq!(shown, 30);

        // Next boundary publishes the second window's count (2 frames)
        let shown = counter.tick_at(t0 + Duration::from_secs(2));
        assert_eq!(shown, 2);
    }
}
