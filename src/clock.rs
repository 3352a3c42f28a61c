use std::time::Instant;

/// One clock reading: total elapsed time and the delta since the last tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub elapsed: f32,
    pub delta: f32,
}

/// Monotonic animation clock
///
/// Tracks elapsed seconds since start and derives per-frame deltas from the
/// previous tick's elapsed value.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    previous_elapsed: f32,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            previous_elapsed: 0.0,
        }
    }

    /// Seconds since the clock started
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Read elapsed time and advance the clock, yielding the frame delta
    pub fn tick(&mut self) -> Tick {
        let elapsed = self.elapsed();
        let delta = elapsed - self.previous_elapsed;
        self.previous_elapsed = elapsed;
        Tick { elapsed, delta }
    }

    /// Restart the clock from zero
    pub fn reset(&mut self) {
        self.start = Instant::now();
        self.previous_elapsed = 0.0;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
