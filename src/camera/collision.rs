use glam::Vec3;

/// Safe radius outside the tree's height band
pub const OUTER_SAFE_RADIUS: f32 = 2.0;
/// Safe radius at the top of the band; grows by [`SAFE_RADIUS_SLOPE`] per unit below it
pub const BAND_SAFE_RADIUS: f32 = 3.0;
pub const SAFE_RADIUS_SLOPE: f32 = 0.3;
pub const BAND_BOTTOM: f32 = -2.0;
pub const BAND_TOP: f32 = 12.0;
/// Closer than this the camera is treated as already inside and left alone
pub const INNER_BOUND: f32 = 4.0;

/// Minimum horizontal distance from the vertical axis at height `y`.
pub fn min_safe_radius(y: f32) -> f32 {
    if y > BAND_BOTTOM && y < BAND_TOP {
        BAND_SAFE_RADIUS + (BAND_TOP - y) * SAFE_RADIUS_SLOPE
    } else {
        OUTER_SAFE_RADIUS
    }
}

/// Pushes `position` outward horizontally when it sits between
/// [`INNER_BOUND`] and the safe radius for its height.
pub fn avoid_collision(position: Vec3) -> Vec3 {
    let distance = position.x.hypot(position.z);
    let safe = min_safe_radius(position.y);
    if distance < safe && distance > INNER_BOUND && distance > 0.0 {
        let push = safe / distance;
        Vec3::new(position.x * push, position.y, position.z * push)
    } else {
        position
    }
}
