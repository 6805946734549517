use crate::core::input::PointerEvent;

/// Receiver side of the pointer boundary; the input layer never touches
/// camera state directly
pub trait PointerSink {
    fn handle_pointer(&mut self, event: PointerEvent);
}
