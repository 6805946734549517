//! Camera choreography: ambient orbit, scripted tour blending, collision
//! avoidance and manual pointer override.

pub mod collision;
pub mod controller;
pub mod orbit;
pub mod state;
pub mod tour;

pub use collision::{avoid_collision, min_safe_radius};
pub use controller::{CameraController, FrameInput, TourSettings};
pub use orbit::{ambient_orbit, orbit_speed, OrbitSample};
pub use state::{CameraState, OrbitOffsets};
pub use tour::{blend_toward, blend_weight, focus_point, tour_phase, TourFocus, TourPhase};
