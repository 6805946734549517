mod angle;
mod color;
mod easing;

pub use angle::{lerp_angle, shortest_arc, wrap_angle};
pub use color::Rgb;
pub use easing::{lerp, smoothstep};
