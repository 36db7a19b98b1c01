//! Frame timing.
//!
//! [`FrameClock`] turns the monotonic timestamps a host hands to each
//! frame callback into per-frame deltas. The first frame after creation
//! or [`reset`](FrameClock::reset) always yields a delta of zero, so a
//! loop that was paused or backgrounded never integrates the whole gap
//! in one step.
//!
//! # Example
//!
//! ```
//! use pixie::time::FrameClock;
//!
//! let mut clock = FrameClock::new();
//! assert_eq!(clock.tick(1_000.0), 0.0);
//! assert_eq!(clock.tick(1_016.0), 16.0);
//!
//! // Window regained focus after a minute in the background
//! clock.reset();
//! assert_eq!(clock.tick(61_016.0), 0.0);
//! ```

/// How often the FPS estimate is refreshed, in milliseconds.
const FPS_UPDATE_INTERVAL_MS: f64 = 500.0;

/// Per-frame delta tracking driven by host timestamps in milliseconds.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous frame, `None` until the first tick.
    last_frame: Option<f64>,
    /// Time since last frame in milliseconds.
    delta_ms: f64,
    /// Total frames ticked.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Timestamp of last FPS calculation.
    fps_update_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now_ms` and return the delta since the last one.
    ///
    /// Returns `0` for the first frame after a reset and for timestamps
    /// that go backwards.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        self.delta_ms = match self.last_frame {
            Some(last) if now_ms > last => now_ms - last,
            _ => 0.0,
        };
        self.last_frame = Some(now_ms);
        self.frame_count += 1;

        match self.fps_update_time {
            Some(since) if now_ms - since >= FPS_UPDATE_INTERVAL_MS => {
                let frames = self.frame_count - self.fps_frame_count;
                self.fps = (frames as f64 * 1000.0 / (now_ms - since)) as f32;
                self.fps_frame_count = self.frame_count;
                self.fps_update_time = Some(now_ms);
            }
            Some(_) => {}
            None => {
                self.fps_frame_count = self.frame_count;
                self.fps_update_time = Some(now_ms);
            }
        }

        self.delta_ms
    }

    /// Forget the previous timestamp so the next tick yields zero.
    pub fn reset(&mut self) {
        self.last_frame = None;
        self.fps_update_time = None;
    }

    /// Delta returned by the most recent tick, in milliseconds.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta_ms
    }

    /// Total frames ticked.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(123_456.0), 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_deltas() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        assert_eq!(clock.tick(16.0), 16.0);
        assert_eq!(clock.tick(50.0), 34.0);
        assert_eq!(clock.delta(), 34.0);
    }

    #[test]
    fn test_reset_zeroes_next_delta() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        clock.tick(16.0);
        clock.reset();
        assert_eq!(clock.tick(90_000.0), 0.0);
        assert_eq!(clock.tick(90_016.0), 16.0);
    }

    #[test]
    fn test_backwards_timestamp() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(90.0), 0.0);
        assert_eq!(clock.tick(106.0), 16.0);
    }

    #[test]
    fn test_fps() {
        let mut clock = FrameClock::new();
        for i in 0..=60 {
            clock.tick(i as f64 * 10.0);
        }
        // 50 frames between t=0 and t=500
        assert!((clock.fps() - 100.0).abs() < 0.01);
    }
}
