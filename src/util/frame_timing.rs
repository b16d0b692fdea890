use web_time::{Duration, Instant};

/// Per-tick delta time and a smoothed frame rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Timestamp of the previous tick.
    last_tick: Instant,
    /// Duration of the most recent tick.
    delta: Duration,
    /// Ticks seen so far.
    ticks: u64,
    /// Exponential moving average of the instantaneous rate.
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0).
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Clock starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            delta: Duration::ZERO,
            ticks: 0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Mark the start of a tick. Returns the time since the previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        self.record(now.duration_since(self.last_tick));
        self.last_tick = now;
        self.delta
    }

    fn record(&mut self, elapsed: Duration) {
        self.delta = elapsed;
        self.ticks += 1;
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Duration of the most recent tick.
    #[must_use]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Number of ticks so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_moves_toward_observed_rate() {
        let mut clock = FrameClock::new();
        for _ in 0..200 {
            clock.record(Duration::from_millis(20));
        }
        assert!((clock.fps() - 50.0).abs() < 0.1);
        assert_eq!(clock.ticks(), 200);
        assert_eq!(clock.delta(), Duration::from_millis(20));
    }

    #[test]
    fn zero_delta_keeps_rate() {
        let mut clock = FrameClock::new();
        clock.record(Duration::ZERO);
        assert_eq!(clock.fps(), 60.0);
        let _ = clock.tick();
        assert_eq!(clock.ticks(), 2);
    }
}
