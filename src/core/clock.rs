use std::time::Instant;

/// Longest frame step handed to the simulation; a stalled window (drag
/// resize, debugger) must not fast-forward the tour
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Wall clock for the interactive viewer - just tracks delta time
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the last tick, capped at [`MAX_FRAME_DELTA`]
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(MAX_FRAME_DELTA)
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
