//! Frame clocks

use std::time::{Duration, Instant};

use super::Clock;

/// Deterministic clock: every tick reports exactly one frame at the target rate
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    ticks: u64,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Clock for FixedClock {
    fn tick(&mut self, target_fps: u32) -> f32 {
        self.ticks += 1;
        1.0 / target_fps.max(1) as f32
    }
}

/// Wall-clock pacing: sleeps out the remainder of each frame and reports the
/// real elapsed time
#[derive(Debug, Clone)]
pub struct RealtimeClock {
    last: Instant,
}

impl RealtimeClock {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }
}

impl Default for RealtimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for RealtimeClock {
    fn tick(&mut self, target_fps: u32) -> f32 {
        let frame = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        let spent = self.last.elapsed();
        if spent < frame {
            std::thread::sleep(frame - spent);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
