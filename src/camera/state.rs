use glam::{Vec2, Vec3};

use crate::core::input::PointerEvent;
use crate::types::CameraPose;

pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 6.0, 24.0);
pub const INITIAL_LOOK_AT: Vec3 = Vec3::new(0.0, 3.0, 0.0);

pub const MIN_ZOOM: f32 = -14.0;
pub const MAX_ZOOM: f32 = 15.0;
pub const MIN_HEIGHT_OFFSET: f32 = -4.0;
pub const MAX_HEIGHT_OFFSET: f32 = 15.0;

/// Radians of orbit per horizontal pixel dragged
pub const ROTATE_SENSITIVITY: f32 = 0.005;
/// World units of height per vertical pixel dragged
pub const HEIGHT_SENSITIVITY: f32 = 0.05;
/// World units of orbit radius per scroll pixel
pub const ZOOM_SENSITIVITY: f32 = 0.05;

/// User-controlled adjustments layered on top of the ambient orbit
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitOffsets {
    pub zoom: f32,
    pub rotation: f32,
    pub height: f32,
}

/// Everything the camera remembers between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub look_at: Vec3,
    /// Tour clock; only advances while the tour is enabled
    pub elapsed: f32,
    pub offsets: OrbitOffsets,
    pub dragging: bool,
    pub last_pointer: Option<Vec2>,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: INITIAL_POSITION,
            look_at: INITIAL_LOOK_AT,
            elapsed: 0.0,
            offsets: OrbitOffsets::default(),
            dragging: false,
            last_pointer: None,
        }
    }
}

impl CameraState {
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.look_at)
    }

    /// Applies one pointer event to the offsets. Non-finite deltas are dropped.
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::DragStart { x, y } => {
                self.dragging = true;
                self.last_pointer = Some(Vec2::new(x, y)).filter(|p| p.is_finite());
            }
            PointerEvent::DragMove { dx, dy } => {
                if !self.dragging || !dx.is_finite() || !dy.is_finite() {
                    return;
                }
                self.offsets.rotation -= dx * ROTATE_SENSITIVITY;
                self.offsets.height = (self.offsets.height + dy * HEIGHT_SENSITIVITY)
                    .clamp(MIN_HEIGHT_OFFSET, MAX_HEIGHT_OFFSET);
                if let Some(pointer) = self.last_pointer.as_mut() {
                    *pointer += Vec2::new(dx, dy);
                }
            }
            PointerEvent::DragEnd => {
                self.dragging = false;
            }
            PointerEvent::Scroll { delta_y } => {
                if !delta_y.is_finite() {
                    return;
                }
                self.offsets.zoom =
                    (self.offsets.zoom + delta_y * ZOOM_SENSITIVITY).clamp(MIN_ZOOM, MAX_ZOOM);
            }
        }
    }
}
