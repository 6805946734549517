use glam::Vec3;
use log::debug;

use super::collision::avoid_collision;
use super::orbit::{ambient_orbit, orbit_speed};
use super::state::CameraState;
use super::tour::{blend_toward, blend_weight, tour_phase, TourFocus};
use crate::core::input::{InputQueue, PointerEvent};
use crate::traits::PointerSink;
use crate::types::CameraPose;

/// Per-frame smoothing toward the goal pose while the user drags
pub const DRAG_SMOOTHING: f32 = 0.2;
/// Per-frame smoothing toward the goal pose otherwise
pub const FREE_SMOOTHING: f32 = 0.1;

pub const DEFAULT_TOUR_SPEED: f32 = 0.12;

/// Settings the camera reads every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourSettings {
    pub enabled: bool,
    /// 0–1 scale factor on the orbit speed
    pub speed: f32,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: DEFAULT_TOUR_SPEED,
        }
    }
}

/// Inputs to one [`CameraController::update`]
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub tour: TourSettings,
    /// Focus points in tour order; owned by the scene
    pub targets: &'a [Vec3],
}

impl<'a> FrameInput<'a> {
    pub fn new(tour: TourSettings, targets: &'a [Vec3]) -> Self {
        Self { tour, targets }
    }
}

/// Orbit / tour camera.
///
/// Pointer events may arrive at any time through [`PointerSink`]; they only
/// adjust the orbit offsets and the dragging flag. Everything else happens
/// in [`update`](Self::update), once per frame.
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    state: CameraState,
    goal: Option<CameraPose>,
    focus: Option<TourFocus>,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn pose(&self) -> CameraPose {
        self.state.pose()
    }

    /// Unsmoothed pose computed by the last update
    pub fn goal(&self) -> Option<CameraPose> {
        self.goal
    }

    /// Tour target being visited during the last update, if any
    pub fn focus(&self) -> Option<TourFocus> {
        self.focus
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Drains queued pointer events into the camera.
    pub fn consume(&mut self, queue: &mut InputQueue) {
        queue.dispatch(self);
    }

    /// Advances one frame and returns the smoothed pose.
    pub fn update(&mut self, delta_time: f32, input: &FrameInput<'_>) -> CameraPose {
        let dt = if delta_time.is_finite() { delta_time.max(0.0) } else { 0.0 };
        if input.tour.enabled {
            self.state.elapsed += dt;
        }

        let goal = self.compute_goal(input);
        let smoothing = if self.state.dragging {
            DRAG_SMOOTHING
        } else {
            FREE_SMOOTHING
        };
        self.state.position = self.state.position.lerp(goal.position, smoothing);
        self.state.look_at = self.state.look_at.lerp(goal.look_at, smoothing);
        self.goal = Some(goal);

        self.state.pose()
    }

    fn compute_goal(&mut self, input: &FrameInput<'_>) -> CameraPose {
        let t = self.state.elapsed;
        let orbit = ambient_orbit(t, orbit_speed(input.tour.speed), &self.state.offsets);

        let focus = if input.tour.enabled && !self.state.dragging {
            self.tour_focus(t, input.targets)
        } else {
            None
        };

        if focus.map(|f| f.target_index) != self.focus.map(|f| f.target_index) {
            match focus {
                Some(f) => debug!("tour focus -> target {} at {:?}", f.target_index, f.target),
                None => debug!("tour focus released"),
            }
        }
        self.focus = focus;

        let mut goal = match focus {
            Some(f) => blend_toward(&orbit, f.target, f.weight, t),
            None => CameraPose::new(orbit.position(), orbit.look_at),
        };

        if !self.state.dragging {
            goal.position = avoid_collision(goal.position);
        }
        goal
    }

    fn tour_focus(&self, t: f32, targets: &[Vec3]) -> Option<TourFocus> {
        let phase = tour_phase(t, targets.len())?;
        let target = targets[phase.cycle_index];
        // a corrupt target skips its cycle rather than poisoning the pose
        if !target.is_finite() {
            return None;
        }
        Some(TourFocus {
            target_index: phase.cycle_index,
            target,
            weight: blend_weight(phase.progress),
        })
    }
}

impl PointerSink for CameraController {
    fn handle_pointer(&mut self, event: PointerEvent) {
        self.state.apply(event);
    }
}
