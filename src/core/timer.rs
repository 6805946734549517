/// Repeating interval timer driven by frame deltas; the host owns it and
/// acts when it fires (content reshuffles)
#[derive(Debug, Clone, Copy)]
pub struct Repeating {
    interval: f32,
    accumulator: f32,
}

impl Repeating {
    /// Create timer that fires every `interval` seconds
    pub fn every(interval: f32) -> Self {
        Self {
            interval: interval.max(f32::EPSILON),
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns true if should fire.
    /// Fires at most once per call; the remainder carries over.
    pub fn tick(&mut self, delta: f32) -> bool {
        if delta.is_finite() && delta > 0.0 {
            self.accumulator += delta;
        }

        if self.accumulator >= self.interval {
            self.accumulator %= self.interval;
            true
        } else {
            false
        }
    }

    /// Fraction of the current interval elapsed, in [0, 1)
    pub fn progress(&self) -> f32 {
        self.accumulator / self.interval
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeating_fires_at_interval() {
        let mut timer = Repeating::every(1.0);

        assert!(!timer.tick(0.6));
        assert!(timer.tick(0.6)); // 1.2s
        assert!((timer.progress() - 0.2).abs() < 1e-5);
        assert!(!timer.tick(0.5));
        assert!(timer.tick(0.4)); // 2.1s
    }

    #[test]
    fn repeating_fires_once_for_huge_delta() {
        let mut timer = Repeating::every(1.0);

        assert!(timer.tick(3.5));
        assert!(!timer.tick(0.1));
    }

    #[test]
    fn repeating_ignores_bad_deltas() {
        let mut timer = Repeating::every(1.0);

        assert!(!timer.tick(f32::NAN));
        assert!(!timer.tick(-5.0));
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn repeating_reset() {
        let mut timer = Repeating::every(2.0);

        timer.tick(1.5);
        timer.reset();
        assert_eq!(timer.progress(), 0.0);
        assert!(!timer.tick(1.5));
    }
}
