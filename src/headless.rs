//! Windowless simulation: fixed-step frames, JSON-lines pose output.

use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::camera::{CameraController, FrameInput, TourSettings};
use crate::core::{InputQueue, PointerEvent, Repeating};
use crate::frame::FixedStepFrames;
use crate::tree::{TreeScene, RESHUFFLE_INTERVAL_SECS};

/// Frames a scripted drag lasts before the pointer is released
pub const SCRIPTED_DRAG_FRAMES: u64 = 30;

/// A synthetic horizontal drag injected into the input queue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedDrag {
    pub start_frame: u64,
    pub dx_per_frame: f32,
}

impl ScriptedDrag {
    /// Builds a drag from the `--drag FRAME DX` pair
    pub fn from_args(args: &[f32]) -> Option<Self> {
        match args {
            [frame, dx] if frame.is_finite() && *frame >= 0.0 => Some(Self {
                start_frame: *frame as u64,
                dx_per_frame: *dx,
            }),
            _ => None,
        }
    }

    fn events_for(&self, frame: u64) -> Option<PointerEvent> {
        let end = self.start_frame + SCRIPTED_DRAG_FRAMES;
        if frame == self.start_frame {
            Some(PointerEvent::DragStart { x: 0.0, y: 0.0 })
        } else if frame > self.start_frame && frame < end {
            Some(PointerEvent::DragMove {
                dx: self.dx_per_frame,
                dy: 0.0,
            })
        } else if frame == end {
            Some(PointerEvent::DragEnd)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub frames: u64,
    pub fps: f32,
    pub drag: Option<ScriptedDrag>,
}

/// One line of output
#[derive(Debug, Clone, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub time: f32,
    pub position: [f32; 3],
    pub look_at: [f32; 3],
    /// Index into the tour target list while a target is being visited
    pub focus: Option<usize>,
}

/// Totals reported when the run finishes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadlessSummary {
    pub frames: u64,
    pub reshuffles: u32,
    pub targets_visited: usize,
}

/// Runs the camera against `scene` for `options.frames` frames, writing one
/// JSON record per frame to `out`.
pub fn run<R: Rng, W: Write>(
    scene: &mut TreeScene<R>,
    tour: TourSettings,
    options: &HeadlessOptions,
    out: &mut W,
) -> Result<HeadlessSummary> {
    let mut camera = CameraController::new();
    let mut queue = InputQueue::new();
    let mut reshuffle = Repeating::every(RESHUFFLE_INTERVAL_SECS);
    let mut summary = HeadlessSummary::default();
    let mut last_focus = None;

    info!(
        "Headless run: {} frames at {} fps, {} targets",
        options.frames,
        options.fps,
        scene.targets().len()
    );

    for frame in FixedStepFrames::new(options.frames, options.fps) {
        if let Some(event) = options.drag.and_then(|drag| drag.events_for(frame.number)) {
            queue.push(event);
        }
        camera.consume(&mut queue);

        if reshuffle.tick(frame.delta) {
            scene.reshuffle();
            summary.reshuffles += 1;
            debug!("Reshuffled content at t={:.1}", frame.time);
        }

        let pose = camera.update(frame.delta, &FrameInput::new(tour, scene.targets()));
        let focus = camera.focus().map(|f| f.target_index);
        if focus.is_some() && focus != last_focus {
            summary.targets_visited += 1;
        }
        last_focus = focus;

        let record = FrameRecord {
            frame: frame.number,
            time: frame.time,
            position: pose.position.to_array(),
            look_at: pose.look_at.to_array(),
            focus,
        };
        serde_json::to_writer(&mut *out, &record).context("Failed to encode frame record")?;
        writeln!(out).context("Failed to write frame record")?;
        summary.frames += 1;
    }

    out.flush().context("Failed to flush output")?;
    info!(
        "Headless run finished: {} frames, {} targets visited, {} reshuffles",
        summary.frames, summary.targets_visited, summary.reshuffles
    );
    Ok(summary)
}
