use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::Rgb;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub _pad1: f32,
    pub forward: [f32; 3],
    pub _pad2: f32,
    pub right: [f32; 3],
    pub _pad3: f32,
    pub up: [f32; 3],
    pub time: f32, // Animation time for ornament wobble
}

/// Camera position and gaze for one frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    pub fn forward(&self) -> Vec3 {
        let dir = (self.look_at - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            Vec3::NEG_Z
        } else {
            dir
        }
    }

    pub fn right(&self) -> Vec3 {
        let right = self.forward().cross(Vec3::Y).normalize_or_zero();
        if right == Vec3::ZERO {
            Vec3::X
        } else {
            right
        }
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }

    pub fn to_uniform(&self, time: f32) -> CameraUniform {
        CameraUniform {
            position: self.position.to_array(),
            _pad1: 0.0,
            forward: self.forward().to_array(),
            _pad2: 0.0,
            right: self.right().to_array(),
            _pad3: 0.0,
            up: self.up().to_array(),
            time,
        }
    }
}

/// A user photo as seen by the layout core: identity plus an optional
/// average colour sampled by the upload pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    #[serde(default, rename = "colorHint", alias = "color_hint")]
    pub color_hint: Option<Rgb>,
}

impl ContentItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color_hint: None,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color_hint = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_is_std140_friendly() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
    }

    #[test]
    fn test_pose_basis_is_orthonormal() {
        let pose = CameraPose::new(Vec3::new(0.0, 6.0, 24.0), Vec3::new(0.0, 3.0, 0.0));
        let (f, r, u) = (pose.forward(), pose.right(), pose.up());
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
        assert!(f.dot(u).abs() < 1e-5);
        assert!(u.y > 0.0);
    }

    #[test]
    fn test_pose_degenerate_gaze_stays_finite() {
        let pose = CameraPose::new(Vec3::ONE, Vec3::ONE);
        let uniform = pose.to_uniform(1.5);
        assert!(uniform.forward.iter().all(|v| v.is_finite()));
        assert!(uniform.up.iter().all(|v| v.is_finite()));
        assert_eq!(uniform.time, 1.5);
    }

    #[test]
    fn test_pose_straight_down_has_right_vector() {
        let pose = CameraPose::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO);
        assert_eq!(pose.right(), Vec3::X);
    }

    #[test]
    fn test_content_item_json() {
        let items: Vec<ContentItem> =
            serde_json::from_str(r##"[{"id":"a","colorHint":"#b0b0b0"},{"id":"b"}]"##).unwrap();
        assert_eq!(items[0], ContentItem::new("a").with_color(Rgb::new(0xb0, 0xb0, 0xb0)));
        assert_eq!(items[1].color_hint, None);
    }
}
