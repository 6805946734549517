use glam::Vec3;

use super::state::OrbitOffsets;

pub const BASE_RADIUS: f32 = 24.0;
pub const RADIUS_SWAY: f32 = 2.0;
pub const BASE_HEIGHT: f32 = 6.0;
pub const HEIGHT_SWAY: f32 = 2.0;
/// Height bobs slightly faster than the orbit turns
pub const HEIGHT_SWAY_RATE: f32 = 1.4;
pub const LOOK_AT_HEIGHT: f32 = 5.0;
/// Share of the user height offset the gaze follows
pub const LOOK_AT_FOLLOW: f32 = 0.5;
/// Angular speed (rad per time unit) at tour speed 1.0
pub const MAX_ORBIT_SPEED: f32 = 0.2;

/// Maps the 0–1 tour speed setting to an angular orbit speed.
pub fn orbit_speed(tour_speed: f32) -> f32 {
    if tour_speed.is_finite() {
        tour_speed.clamp(0.0, 1.0) * MAX_ORBIT_SPEED
    } else {
        0.0
    }
}

/// Cylindrical description of the ambient orbit at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSample {
    pub angle: f32,
    pub radius: f32,
    pub height: f32,
    pub look_at: Vec3,
}

impl OrbitSample {
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.angle.sin() * self.radius,
            self.height,
            self.angle.cos() * self.radius,
        )
    }
}

pub fn auto_height(t: f32, speed: f32) -> f32 {
    BASE_HEIGHT + (t * speed * HEIGHT_SWAY_RATE).sin() * HEIGHT_SWAY
}

/// The free circular orbit around the tree's vertical axis.
pub fn ambient_orbit(t: f32, speed: f32, offsets: &OrbitOffsets) -> OrbitSample {
    OrbitSample {
        angle: t * speed + offsets.rotation,
        radius: BASE_RADIUS + offsets.zoom + (t * speed).sin() * RADIUS_SWAY,
        height: auto_height(t, speed) + offsets.height,
        look_at: Vec3::new(0.0, LOOK_AT_HEIGHT + offsets.height * LOOK_AT_FOLLOW, 0.0),
    }
}
