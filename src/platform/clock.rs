//! Tick sources

use std::time::{Duration, Instant};

use super::TickSource;
use crate::consts::{MAX_FRAME_DT, SIM_DT};

/// Wall-clock ticker that sleeps to hold a fixed cadence
#[derive(Debug)]
pub struct FixedClock {
    interval: Duration,
    last: Instant,
    deadline: Instant,
}

impl FixedClock {
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            interval,
            last: now,
            deadline: now + interval,
        }
    }

    /// 60 Hz
    pub fn sixty_hz() -> Self {
        Self::new(Duration::from_secs_f32(SIM_DT))
    }
}

impl TickSource for FixedClock {
    fn next_tick(&mut self) -> f32 {
        let now = Instant::now();
        if self.deadline > now {
            std::thread::sleep(self.deadline - now);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f32();
        self.last = now;

        self.deadline += self.interval;
        // Fell behind: don't try to catch up with a burst of ticks
        if self.deadline <= now {
            self.deadline = now + self.interval;
        }

        elapsed.min(MAX_FRAME_DT)
    }
}

/// Ticker that reports a constant step without waiting
#[derive(Debug, Clone, Copy)]
pub struct SteppedClock {
    dt: f32,
}

impl SteppedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl TickSource for SteppedClock {
    fn next_tick(&mut self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_clock() {
        let mut clock = SteppedClock::new(SIM_DT);
        assert_eq!(clock.next_tick(), SIM_DT);
        assert_eq!(clock.next_tick(), SIM_DT);
    }

    #[test]
    fn test_fixed_clock_waits_for_interval() {
        let mut clock = FixedClock::new(Duration::from_millis(5));
        let start = Instant::now();
        for _ in 0..3 {
            let dt = clock.next_tick();
            assert!(dt > 0.0 && dt <= MAX_FRAME_DT);
        }
        assert!(start.elapsed() >= Duration::from_millis(14));
    }

    #[test]
    fn test_fixed_clock_clamps_stalls() {
        let mut clock = FixedClock::new(Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(150));
        assert_eq!(clock.next_tick(), MAX_FRAME_DT);
    }
}
