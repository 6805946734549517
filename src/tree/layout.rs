//! Deterministic slot placement on the tree's conical bands.
//!
//! Every pose is a pure function of its slot address and the band geometry:
//! the "random" scatter comes from a sine hash of a fixed per-slot seed, so
//! the same inputs always land on bit-identical positions.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::layers::Layer;
use crate::math::Rgb;

/// Taper of the cone surface; higher values pull the upper part inward faster
pub const FLARE_EXPONENT: f32 = 1.4;
/// Full width of the angular jitter, centred on the even spacing
pub const JITTER_SPAN: f32 = 0.8;
/// Slots sit in this fraction band of the layer height, measured from the bottom
pub const MIN_HEIGHT_FRACTION: f32 = 0.05;
pub const MAX_HEIGHT_FRACTION: f32 = 0.3;
/// Gap between the cone surface and the ornament centre
pub const SURFACE_CLEARANCE: f32 = 0.7;
/// Floor applied to degenerate radius/height values
pub const MIN_EXTENT: f32 = 0.1;

const LAYER_SEED: f64 = 137.0;
const SLOT_SEED: f64 = 928.0;
const HASH_SCALE: f64 = 10_000.0;

pub const FILLERS_PER_SLOT: usize = 2;
pub const FILLER_START_ANGLE: f32 = PI / 3.0;
pub const FILLER_PALETTE: [Rgb; 4] = [
    Rgb::new(0x87, 0xce, 0xfa),
    Rgb::new(0x1e, 0x90, 0xff),
    Rgb::new(0xff, 0xd7, 0x00),
    Rgb::new(0xff, 0xff, 0xff),
];
pub const FILLER_MIN_SCALE: f32 = 0.25;
pub const FILLER_SCALE_SPAN: f32 = 0.2;

/// Position (relative to the layer centre) and facing of one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPose {
    pub position: Vec3,
    pub y_rotation: f32,
}

/// A filler bauble: decorative only, never holds content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillerPose {
    pub pose: SlotPose,
    pub color: Rgb,
    pub scale: f32,
}

fn slot_seed(layer_index: usize, slot_index: usize) -> f64 {
    layer_index as f64 * LAYER_SEED + slot_index as f64 * SLOT_SEED
}

/// Fractional part of a scaled trig value, folded into `[0, 1]`.
fn hash_unit(value: f64) -> f32 {
    ((value * HASH_SCALE).fract().abs() as f32).min(1.0)
}

fn clamp_extent(value: f32) -> f32 {
    // f32::max discards NaN
    value.max(MIN_EXTENT)
}

/// Radius of the flared cone at normalised height `y_norm` (0 = bottom).
pub fn cone_radius(radius: f32, y_norm: f32) -> f32 {
    let y_norm = if y_norm.is_nan() { 0.0 } else { y_norm.clamp(0.0, 1.0) };
    radius * (1.0 - y_norm).powf(FLARE_EXPONENT)
}

/// Computes the pose of one slot.
///
/// `radius` and `height` are the effective (already scaled) extents of the
/// layer; values below [`MIN_EXTENT`] are raised to it. A `slot_count` of zero
/// is treated as one so the angular step stays finite.
pub fn slot_pose(
    layer_index: usize,
    slot_index: usize,
    slot_count: usize,
    radius: f32,
    height: f32,
    start_angle: f32,
) -> SlotPose {
    let radius = clamp_extent(radius);
    let height = clamp_extent(height);
    let seed = slot_seed(layer_index, slot_index);

    let angle_noise = hash_unit(seed.sin());
    let height_noise = hash_unit(seed.cos());

    let step = TAU / slot_count.max(1) as f32;
    let jitter = (angle_noise - 0.5) * JITTER_SPAN;
    let angle = start_angle + slot_index as f32 * step + jitter;

    let t = MIN_HEIGHT_FRACTION + height_noise * (MAX_HEIGHT_FRACTION - MIN_HEIGHT_FRACTION);
    let y = -height / 2.0 + t * height;
    let y_norm = (y + height / 2.0) / height;

    let r = cone_radius(radius, y_norm) + SURFACE_CLEARANCE;

    SlotPose {
        position: Vec3::new(angle.cos() * r, y, angle.sin() * r),
        y_rotation: -angle + PI / 2.0,
    }
}

/// All content slot poses of one layer, in slot order.
pub fn layer_slot_poses(layer_index: usize, layer: &Layer, start_angle: f32) -> Vec<SlotPose> {
    let radius = layer.effective_radius();
    let height = layer.effective_height();
    (0..layer.slot_count)
        .map(|i| slot_pose(layer_index, i, layer.slot_count, radius, height, start_angle))
        .collect()
}

/// Filler baubles for one layer: twice as many as content slots, offset by a
/// sixth of a turn so they fall between ornaments.
pub fn layer_filler_poses(layer_index: usize, layer: &Layer) -> Vec<FillerPose> {
    let count = layer.slot_count * FILLERS_PER_SLOT;
    let radius = layer.effective_radius();
    let height = layer.effective_height();
    (0..count)
        .map(|i| {
            let pose = slot_pose(layer_index, i, count, radius, height, FILLER_START_ANGLE);
            let seed = slot_seed(layer_index, i);
            let color_noise = hash_unit((seed * 0.37).sin());
            let scale_noise = hash_unit((seed * 0.61).cos());
            let palette_index =
                ((color_noise * FILLER_PALETTE.len() as f32) as usize).min(FILLER_PALETTE.len() - 1);
            FillerPose {
                pose,
                color: FILLER_PALETTE[palette_index],
                scale: FILLER_MIN_SCALE + scale_noise * FILLER_SCALE_SPAN,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_radius_bounds() {
        assert_eq!(cone_radius(3.0, 0.0), 3.0);
        assert_eq!(cone_radius(3.0, 1.0), 0.0);
        assert_eq!(cone_radius(3.0, -0.5), 3.0);
        assert_eq!(cone_radius(3.0, 2.0), 0.0);
    }

    #[test]
    fn test_cone_radius_tapers() {
        let lower = cone_radius(2.0, 0.2);
        let upper = cone_radius(2.0, 0.6);
        assert!(lower > upper);
        assert!((cone_radius(1.0, 0.5) - 0.5f32.powf(1.4)).abs() < 1e-6);
    }

    #[test]
    fn test_hash_unit_range() {
        for seed in 0..500 {
            let v = hash_unit((seed as f64 * 37.0).sin());
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_slot_pose_is_deterministic() {
        let a = slot_pose(2, 3, 4, 4.1, 6.8, 0.0);
        let b = slot_pose(2, 3, 4, 4.1, 6.8, 0.0);
        assert_eq!(a.position.to_array().map(f32::to_bits), b.position.to_array().map(f32::to_bits));
        assert_eq!(a.y_rotation.to_bits(), b.y_rotation.to_bits());
    }

    #[test]
    fn test_slot_pose_faces_outward() {
        let pose = slot_pose(0, 0, 7, 5.28, 8.8, 0.0);
        let angle = pose.position.z.atan2(pose.position.x);
        let expected = -angle + PI / 2.0;
        let diff = crate::math::wrap_angle(pose.y_rotation - expected);
        assert!(diff.abs() < 1e-4);
    }

    #[test]
    fn test_slot_pose_sits_outside_surface() {
        let (radius, height) = (5.28, 8.8);
        for i in 0..7 {
            let pose = slot_pose(0, i, 7, radius, height, 0.0);
            let y_norm = (pose.position.y + height / 2.0) / height;
            let horizontal = pose.position.x.hypot(pose.position.z);
            let expected = cone_radius(radius, y_norm) + SURFACE_CLEARANCE;
            assert!((horizontal - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_slot_pose_height_band() {
        let height = 8.0;
        for i in 0..12 {
            let pose = slot_pose(1, i, 12, 4.0, height, 0.0);
            let t = (pose.position.y + height / 2.0) / height;
            assert!(t >= MIN_HEIGHT_FRACTION - 1e-5 && t <= MAX_HEIGHT_FRACTION + 1e-5);
        }
    }

    #[test]
    fn test_slot_pose_jitter_bounded() {
        let count = 6;
        for i in 0..count {
            let pose = slot_pose(3, i, count, 4.0, 6.0, 0.0);
            let angle = pose.position.z.atan2(pose.position.x);
            let base = i as f32 * TAU / count as f32;
            let jitter = crate::math::wrap_angle(angle - base);
            assert!(jitter.abs() <= JITTER_SPAN / 2.0 + 1e-4, "slot {} jitter {}", i, jitter);
        }
    }

    #[test]
    fn test_degenerate_extent_is_clamped() {
        let zero = slot_pose(0, 0, 3, 0.0, 0.0, 0.0);
        let negative = slot_pose(0, 0, 3, -4.0, -1.0, 0.0);
        let floor = slot_pose(0, 0, 3, MIN_EXTENT, MIN_EXTENT, 0.0);
        assert_eq!(zero, floor);
        assert_eq!(negative, floor);
        assert!(zero.position.is_finite());
    }

    #[test]
    fn test_nan_extent_is_clamped() {
        let pose = slot_pose(0, 1, 3, f32::NAN, f32::NAN, 0.0);
        assert!(pose.position.is_finite());
    }

    #[test]
    fn test_zero_slot_count_is_finite() {
        let pose = slot_pose(0, 0, 0, 2.0, 2.0, 0.0);
        assert!(pose.position.is_finite());
        assert!(pose.y_rotation.is_finite());
    }

    #[test]
    fn test_layer_slot_poses_count() {
        let layer = Layer::new(2.5, 2.2, 2.4, 4.0, 7);
        assert_eq!(layer_slot_poses(0, &layer, 0.0).len(), 7);
        let empty = Layer::new(0.0, 1.0, 1.0, 1.0, 0);
        assert!(layer_slot_poses(0, &empty, 0.0).is_empty());
    }

    #[test]
    fn test_start_angle_rotates_layout() {
        let layer = Layer::new(0.0, 1.0, 2.0, 3.0, 4);
        let base = layer_slot_poses(1, &layer, 0.0);
        let turned = layer_slot_poses(1, &layer, 0.5);
        for (a, b) in base.iter().zip(&turned) {
            assert!((a.position.y - b.position.y).abs() < 1e-6);
            assert!((a.y_rotation - b.y_rotation - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_filler_poses() {
        let layer = Layer::new(4.2, 2.0, 2.35, 3.9, 6);
        let fillers = layer_filler_poses(1, &layer);
        assert_eq!(fillers.len(), 12);
        for filler in &fillers {
            assert!(FILLER_PALETTE.contains(&filler.color));
            assert!(filler.scale >= FILLER_MIN_SCALE);
            assert!(filler.scale <= FILLER_MIN_SCALE + FILLER_SCALE_SPAN + 1e-6);
        }
        assert_eq!(fillers, layer_filler_poses(1, &layer));
    }
}
