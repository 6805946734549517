use std::collections::VecDeque;

use crate::traits::PointerSink;

/// Screen-space pointer input consumed by the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer captured at `(x, y)` in physical pixels
    DragStart { x: f32, y: f32 },
    /// Movement since the previous drag event
    DragMove { dx: f32, dy: f32 },
    DragEnd,
    /// Positive values zoom out
    Scroll { delta_y: f32 },
}

/// FIFO of pointer events collected between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<PointerEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Delivers every queued event to `sink` in arrival order.
    pub fn dispatch<S: PointerSink + ?Sized>(&mut self, sink: &mut S) {
        for event in self.events.drain(..) {
            sink.handle_pointer(event);
        }
    }
}

impl Extend<PointerEvent> for InputQueue {
    fn extend<I: IntoIterator<Item = PointerEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
