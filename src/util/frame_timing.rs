//! Wall-clock frame timing: the source of per-frame `delta_time` values.

use web_time::Instant;

/// Wall-clock frame timer producing per-frame `delta_time` values.
///
/// The camera consumes elapsed seconds supplied by the caller each frame;
/// `FrameClock` is that source. It also tracks a smoothed FPS figure for
/// overlays and logging.
pub struct FrameClock {
    /// Timestamp of the previous `tick`.
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock; the first `tick` measures from this instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Call once per frame. Returns seconds elapsed since the previous
    /// `tick` (or since construction, for the first call) and updates the
    /// smoothed FPS.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        let delta_time = elapsed.as_secs_f32();
        if delta_time > 0.0 {
            let instant_fps = 1.0 / delta_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        delta_time
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_returns_non_negative_elapsed_seconds() {
        let mut clock = FrameClock::new();
        let dt = clock.tick();
        assert!(dt >= 0.0);
        let dt = clock.tick();
        assert!(dt >= 0.0);
    }

    #[test]
    fn ticks_measure_real_elapsed_time() {
        let mut clock = FrameClock::new();
        let _ = clock.tick();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let dt = clock.tick();
        assert!(dt >= 0.010);
        // Generous upper bound; scheduler jitter only adds time.
        assert!(dt < 5.0);
    }

    #[test]
    fn fps_stays_positive_and_smoothed() {
        let mut clock = FrameClock::new();
        for _ in 0..5 {
            let _ = clock.tick();
        }
        assert!(clock.fps() > 0.0);
    }
}
