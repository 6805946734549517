use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use super::input::PointerEvent;

/// Pixels per wheel "line" when the platform reports line deltas
pub const LINE_HEIGHT_PX: f32 = 100.0;

/// Adapter that turns Winit window events into camera pointer events
#[derive(Debug, Clone, Default)]
pub struct WinitPointerAdapter {
    /// Last known cursor position (relative to window)
    cursor: Option<(f32, f32)>,
    /// Left button currently captured
    dragging: bool,
}

impl WinitPointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one Winit event; most events produce nothing
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.press(),
                ElementState::Released => self.release(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => self.release(),
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, lines) => self.wheel_lines(*lines),
                MouseScrollDelta::PixelDelta(position) => self.wheel_pixels(position.y as f32),
            },
            _ => None,
        }
    }

    pub fn press(&mut self) -> Option<PointerEvent> {
        if self.dragging {
            return None;
        }
        self.dragging = true;
        let (x, y) = self.cursor.unwrap_or((0.0, 0.0));
        Some(PointerEvent::DragStart { x, y })
    }

    /// Button release or pointer leaving the window
    pub fn release(&mut self) -> Option<PointerEvent> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        Some(PointerEvent::DragEnd)
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<PointerEvent> {
        let previous = self.cursor.replace((x, y));
        match previous {
            Some((px, py)) if self.dragging => Some(PointerEvent::DragMove {
                dx: x - px,
                dy: y - py,
            }),
            _ => None,
        }
    }

    /// Winit reports positive lines when scrolling up; the camera zooms out
    /// on positive deltas, matching a browser wheel's `deltaY`
    pub fn wheel_lines(&mut self, lines: f32) -> Option<PointerEvent> {
        self.wheel_pixels(lines * LINE_HEIGHT_PX)
    }

    pub fn wheel_pixels(&mut self, pixels: f32) -> Option<PointerEvent> {
        if pixels == 0.0 || !pixels.is_finite() {
            return None;
        }
        Some(PointerEvent::Scroll { delta_y: -pixels })
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }
}
