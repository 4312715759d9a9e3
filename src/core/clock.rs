use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started; monotonically increasing
    pub time: f32,
    /// Seconds since the previous tick
    pub delta: f32,
}

/// Frame clock - tracks absolute time since start and per-tick delta
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame: 0,
        }
    }

    /// Advance the clock and return the new frame's timing
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo {
            number: self.frame,
            time: now.duration_since(self.start).as_secs_f32(),
            delta: now.duration_since(self.last_tick).as_secs_f32(),
        };

        self.frame += 1;
        self.last_tick = now;
        info
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
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_counts_frames() {
        let mut clock = Clock::new();

        assert_eq!(clock.tick().number, 0);
        assert_eq!(clock.tick().number, 1);
        assert_eq!(clock.tick().number, 2);
    }

    #[test]
    fn clock_time_is_monotonic() {
        let mut clock = Clock::new();

        let first = clock.tick();
        thread::sleep(Duration::from_millis(5));
        let second = clock.tick();

        assert!(second.time > first.time);
        assert!(second.delta >= 0.005);
    }

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let info = clock.tick();

        // Should be roughly 10ms = 0.01s
        assert!(info.delta >= 0.009 && info.delta <= 0.050);
    }
}
