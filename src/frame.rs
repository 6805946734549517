/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Finite iterator of evenly spaced frames for headless runs.
/// Time is derived from the frame number so it never drifts.
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    next: u64,
    count: u64,
    delta: f32,
}

impl FixedStepFrames {
    /// `count` frames at `fps` frames per second; a non-positive rate is
    /// treated as one frame per second
    pub fn new(count: u64, fps: f32) -> Self {
        let fps = if fps.is_finite() && fps > 0.0 { fps } else { 1.0 };
        Self {
            next: 0,
            count,
            delta: 1.0 / fps,
        }
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.next >= self.count {
            return None;
        }
        let number = self.next;
        self.next += 1;
        Some(FrameInfo::new(
            number,
            (number + 1) as f32 * self.delta,
            self.delta,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FixedStepFrames {}
