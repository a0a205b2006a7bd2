use std::time::{Duration, Instant};

/// Time one tick should take at `speed` ticks per second
pub fn pacing_delay(speed: f32) -> Duration {
    debug_assert!(speed > 0.0, "speed must stay positive");
    Duration::from_secs_f64(1.0 / f64::from(speed))
}

/// Frame limiter: each frame lasts `1 / speed` counting the work already done
#[derive(Debug, Clone)]
pub struct Clock {
    frame_start: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            frame_start: Instant::now(),
        }
    }

    /// How long to wait so the current frame spans a full tick
    pub fn remaining(&self, speed: f32) -> Duration {
        pacing_delay(speed).saturating_sub(self.frame_start.elapsed())
    }

    /// Start timing the next frame
    pub fn restart(&mut self) {
        self.frame_start = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacing_follows_speed() {
        assert_eq!(pacing_delay(5.0).as_millis(), 200);
        assert_eq!(pacing_delay(10.0).as_millis(), 100);
        assert!(pacing_delay(5.5) < pacing_delay(5.0));
    }

    #[test]
    fn test_remaining_subtracts_elapsed() {
        let clock = Clock::new();
        std::thread::sleep(Duration::from_millis(30));
        let remaining = clock.remaining(5.0);
        assert!(remaining <= Duration::from_millis(170));
    }

    #[test]
    fn test_remaining_saturates() {
        let clock = Clock::new();
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.remaining(1000.0), Duration::ZERO);
    }
}
