pub mod clock;
pub mod input;
pub mod input_adapter;
pub mod timer;

pub use clock::{Clock, MAX_FRAME_DELTA};
pub use input::{InputQueue, PointerEvent};
pub use input_adapter::{WinitPointerAdapter, LINE_HEIGHT_PX};
pub use timer::Repeating;
