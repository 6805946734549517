//! Scripted tour: each cycle swoops the camera from the ambient orbit onto
//! one target, holds, and swoops back out.
//!
//! The per-quantity exponents make the angle lead, then height, with the
//! radius tightening last while the gaze locks on fastest.

use glam::{Vec2, Vec3};

use super::orbit::OrbitSample;
use crate::math::{lerp, lerp_angle, smoothstep};
use crate::types::CameraPose;

/// Time units spent on each target
pub const CYCLE_DURATION: f32 = 10.0;
/// Share of the cycle spent easing in (and again easing out)
pub const TRANSITION_FRACTION: f32 = 0.3;
/// Distance the camera stops short of a target, measured outward from the axis
pub const FOCUS_DISTANCE: f32 = 1.8;

pub const ANGLE_EXPONENT: f32 = 0.5;
pub const HEIGHT_EXPONENT: f32 = 1.5;
pub const RADIUS_EXPONENT: f32 = 2.0;
pub const GAZE_EXPONENT: f32 = 0.2;

/// Above this weight the camera is considered locked on and hovers
pub const LOCK_THRESHOLD: f32 = 0.99;
pub const LOCK_BOB_RATE: f32 = 0.5;
pub const LOCK_BOB_AMPLITUDE: f32 = 0.05;
/// Above this weight the gaze is pinned to the target
pub const GAZE_SNAP_THRESHOLD: f32 = 0.8;

/// Position within the tour at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourPhase {
    pub cycle_index: usize,
    /// Phase within the current cycle, in [0, 1)
    pub progress: f32,
}

/// The target currently being visited and how strongly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourFocus {
    pub target_index: usize,
    pub target: Vec3,
    pub weight: f32,
}

/// Which target the tour is on at time `t`; `None` when there are none.
pub fn tour_phase(t: f32, target_count: usize) -> Option<TourPhase> {
    if target_count == 0 || !t.is_finite() {
        return None;
    }
    let t = t.max(0.0);
    let cycle = (t / CYCLE_DURATION).floor();
    let progress = (t.rem_euclid(CYCLE_DURATION) / CYCLE_DURATION).clamp(0.0, 1.0);
    Some(TourPhase {
        cycle_index: (cycle as u64 % target_count as u64) as usize,
        progress,
    })
}

/// Ease-in / hold / ease-out envelope over one cycle.
///
/// 0 at both ends of the cycle, 1 through the middle 40 %.
pub fn blend_weight(progress: f32) -> f32 {
    if progress < TRANSITION_FRACTION {
        smoothstep(progress / TRANSITION_FRACTION)
    } else if progress > 1.0 - TRANSITION_FRACTION {
        smoothstep((1.0 - progress) / TRANSITION_FRACTION)
    } else {
        1.0
    }
}

/// Where the camera parks to frame `target`: pushed radially away from the
/// vertical axis by [`FOCUS_DISTANCE`] at the target's own height.
pub fn focus_point(target: Vec3) -> Vec3 {
    let outward = Vec3::new(target.x, 0.0, target.z).normalize_or_zero();
    target + outward * FOCUS_DISTANCE
}

fn horizontal_radius(p: Vec3) -> f32 {
    Vec2::new(p.x, p.z).length()
}

/// Blends the orbit pose toward a target by `weight`.
pub fn blend_toward(orbit: &OrbitSample, target: Vec3, weight: f32, t: f32) -> CameraPose {
    let weight = weight.clamp(0.0, 1.0);
    let orbit_position = orbit.position();
    let focus = focus_point(target);

    let orbit_theta = orbit_position.x.atan2(orbit_position.z);
    let focus_theta = focus.x.atan2(focus.z);

    let theta = lerp_angle(orbit_theta, focus_theta, weight.powf(ANGLE_EXPONENT));
    let y = lerp(orbit_position.y, focus.y, weight.powf(HEIGHT_EXPONENT));
    let radius = lerp(
        horizontal_radius(orbit_position),
        horizontal_radius(focus),
        weight.powf(RADIUS_EXPONENT),
    );

    let mut position = Vec3::new(theta.sin() * radius, y, theta.cos() * radius);
    if weight > LOCK_THRESHOLD {
        position.y += (t * LOCK_BOB_RATE).sin() * LOCK_BOB_AMPLITUDE;
    }

    let look_at = if weight > GAZE_SNAP_THRESHOLD {
        target
    } else {
        orbit.look_at.lerp(target, weight.powf(GAZE_EXPONENT))
    };

    CameraPose::new(position, look_at)
}
