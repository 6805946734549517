use std::sync::Arc;

use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::camera::{CameraController, FrameInput};
use crate::config::Settings;
use crate::core::{Clock, InputQueue, Repeating, WinitPointerAdapter};
use crate::frame::FrameInfo;
use crate::tree::{TreeScene, RESHUFFLE_INTERVAL_SECS};
use crate::types::{CameraPose, CameraUniform};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;
const WINDOW_TITLE: &str = "Ornament Tour";
const POSE_LOG_INTERVAL: f32 = 1.0;

/// Everything the viewer simulates per frame, independent of the window
pub struct ViewerState {
    scene: TreeScene,
    settings: Settings,
    camera: CameraController,
    adapter: WinitPointerAdapter,
    queue: InputQueue,
    reshuffle: Repeating,
    pose_log: Repeating,
    frame: FrameInfo,
    uniform: CameraUniform,
}

impl ViewerState {
    pub fn new(scene: TreeScene, settings: Settings) -> Self {
        let camera = CameraController::new();
        let uniform = camera.pose().to_uniform(0.0);
        Self {
            scene,
            settings,
            camera,
            adapter: WinitPointerAdapter::new(),
            queue: InputQueue::new(),
            reshuffle: Repeating::every(RESHUFFLE_INTERVAL_SECS),
            pose_log: Repeating::every(POSE_LOG_INTERVAL),
            frame: FrameInfo::new(0, 0.0, 0.0),
            uniform,
        }
    }

    pub fn scene(&self) -> &TreeScene {
        &self.scene
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn frame(&self) -> FrameInfo {
        self.frame
    }

    /// Camera block for the renderer, refreshed every [`advance`](Self::advance)
    pub fn uniform_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.uniform)
    }

    /// Feeds a window event to the pointer adapter; returns true when it
    /// produced camera input
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match self.adapter.process_event(event) {
            Some(pointer) => {
                self.queue.push(pointer);
                true
            }
            None => false,
        }
    }

    pub fn toggle_tour(&mut self) {
        self.settings.tour_enabled = !self.settings.tour_enabled;
        info!(
            "Tour {}",
            if self.settings.tour_enabled { "enabled" } else { "paused" }
        );
    }

    pub fn reshuffle(&mut self) {
        self.scene.reshuffle();
        self.reshuffle.reset();
        info!("Reshuffled {} content items", self.scene.content().len());
    }

    /// Runs one frame of simulation
    pub fn advance(&mut self, delta: f32) -> CameraPose {
        self.frame = FrameInfo::new(self.frame.number + 1, self.frame.time + delta, delta);
        self.camera.consume(&mut self.queue);

        if self.reshuffle.tick(delta) {
            self.scene.reshuffle();
            info!("Periodic reshuffle at t={:.0}s", self.frame.time);
        }

        let pose = self
            .camera
            .update(delta, &FrameInput::new(self.settings.tour(), self.scene.targets()));
        self.uniform = pose.to_uniform(self.frame.time);

        if self.pose_log.tick(delta) {
            info!(
                "frame {} pos {} look {} focus {:?}",
                self.frame.number,
                pose.position,
                pose.look_at,
                self.camera.focus().map(|f| f.target_index)
            );
        }
        pose
    }

    pub fn title(&self) -> String {
        let pose = self.camera.pose();
        let focus = match self.camera.focus() {
            Some(f) => format!("target {}/{}", f.target_index + 1, self.scene.targets().len()),
            None => "orbit".to_string(),
        };
        format!(
            "{} | ({:.1}, {:.1}, {:.1}) | {} | tour {}",
            WINDOW_TITLE,
            pose.position.x,
            pose.position.y,
            pose.position.z,
            focus,
            if self.settings.tour_enabled { "on" } else { "off" }
        )
    }
}

/// Winit front end around [`ViewerState`]
pub struct ViewerApp {
    window: Option<Arc<Window>>,
    state: ViewerState,
    clock: Clock,
}

impl ViewerApp {
    pub fn new(state: ViewerState) -> Self {
        Self {
            window: None,
            state,
            clock: Clock::new(),
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        match code {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::KeyT => self.state.toggle_tour(),
            KeyCode::KeyR => self.state.reshuffle(),
            _ => {}
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            self.clock.reset();
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.state.handle_window_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, code),
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                self.state.advance(delta);
                if let Some(window) = &self.window {
                    window.set_title(&self.state.title());
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample_content;
    use crate::tree::{default_layers, ContentAssigner, DEFAULT_TREE_COLOR};

    fn state(content: usize) -> ViewerState {
        let mut scene =
            TreeScene::with_assigner(default_layers(), DEFAULT_TREE_COLOR, ContentAssigner::seeded(9));
        scene.set_content(&sample_content(content));
        ViewerState::new(scene, Settings::default())
    }

    #[test]
    fn test_advance_counts_frames() {
        let mut viewer = state(4);
        viewer.advance(0.016);
        viewer.advance(0.016);
        assert_eq!(viewer.frame().number, 2);
        assert!((viewer.frame().time - 0.032).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_refreshed() {
        let mut viewer = state(4);
        let pose = viewer.advance(0.05);
        let uniform: &CameraUniform = bytemuck::from_bytes(viewer.uniform_bytes());
        assert_eq!(uniform.position, pose.position.to_array());
        assert!((uniform.time - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_toggle_tour_freezes_clock() {
        let mut viewer = state(4);
        viewer.toggle_tour();
        assert!(!viewer.settings().tour_enabled);
        viewer.advance(0.1);
        assert_eq!(viewer.camera().state().elapsed, 0.0);
        assert!(viewer.title().ends_with("tour off"));
    }

    #[test]
    fn test_title_reports_focus() {
        let mut viewer = state(4);
        viewer.advance(0.1);
        assert!(viewer.title().contains("target 1/25"), "{}", viewer.title());
    }

    #[test]
    fn test_title_without_content() {
        let mut viewer = state(0);
        viewer.advance(0.1);
        assert!(viewer.title().contains("orbit"));
    }
}
