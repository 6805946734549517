use std::f32::consts::{PI, TAU};

/// Wraps an angle into `[-π, π)`.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Signed difference `to - from` along the shorter arc.
pub fn shortest_arc(from: f32, to: f32) -> f32 {
    wrap_angle(to - from)
}

/// Interpolates between two angles along the shorter arc.
///
/// The result is wrapped back into `[-π, π)`, so crossing the ±π seam never
/// produces a value outside that range.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    wrap_angle(from + shortest_arc(from, to) * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle_identity_in_range() {
        assert!((wrap_angle(1.0) - 1.0).abs() < 1e-6);
        assert!((wrap_angle(-2.5) + 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_angle_full_turns() {
        assert!((wrap_angle(1.0 + TAU) - 1.0).abs() < 1e-5);
        assert!((wrap_angle(1.0 - 3.0 * TAU) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_shortest_arc_crosses_seam() {
        // 3.0 -> -3.0 is 0.283 rad forward through π, not 6 rad backwards
        let delta = shortest_arc(3.0, -3.0);
        assert!((delta - (TAU - 6.0)).abs() < 1e-5);
    }

    #[test]
    fn test_lerp_angle_endpoints() {
        assert!((lerp_angle(0.5, 1.5, 0.0) - 0.5).abs() < 1e-6);
        assert!((lerp_angle(0.5, 1.5, 1.0) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_angle_short_path_midpoint() {
        let mid = lerp_angle(3.0, -3.0, 0.5);
        assert!(mid >= 3.0 || mid <= -3.0, "took the long way: {}", mid);
        assert!(mid.abs() <= PI + 1e-5);
    }
}
