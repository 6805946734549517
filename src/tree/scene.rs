use glam::Vec3;
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use super::assign::{ContentAssigner, SlotAssignment};
use super::layers::{default_layers, slot_ids, total_slots, Layer, SlotId};
use super::layout::{layer_filler_poses, layer_slot_poses};
use super::targets::{extract_targets, slot_world_position, CONTENT_START_ANGLE, DEFAULT_ROOT_OFFSET};
use crate::math::Rgb;
use crate::types::ContentItem;

/// Inward pull applied to filler baubles so they tuck behind ornaments
pub const FILLER_INSET: f32 = 0.95;

pub const DEFAULT_TREE_COLOR: Rgb = Rgb::new(0x2e, 0x8b, 0x57);

/// One content slot as handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrnamentPlacement<'a> {
    pub slot: SlotId,
    pub position: Vec3,
    pub y_rotation: f32,
    /// `None` renders the placeholder bauble
    pub content: Option<&'a ContentItem>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillerPlacement {
    pub position: Vec3,
    pub y_rotation: f32,
    pub color: Rgb,
    pub scale: f32,
}

/// Layers, content and the derived slot assignment and tour targets.
///
/// Derived data is rebuilt eagerly whenever an input changes, so `targets()`
/// is always consistent with `assignment()`.
pub struct TreeScene<R = StdRng> {
    layers: Vec<Layer>,
    color: Rgb,
    root_offset: Vec3,
    assigner: ContentAssigner<R>,
    assignment: SlotAssignment,
    targets: Vec<Vec3>,
}

impl TreeScene<StdRng> {
    pub fn new(color: Rgb) -> Self {
        Self::with_assigner(default_layers(), color, ContentAssigner::from_entropy())
    }
}

impl<R: Rng> TreeScene<R> {
    pub fn with_assigner(layers: Vec<Layer>, color: Rgb, assigner: ContentAssigner<R>) -> Self {
        let mut scene = Self {
            layers,
            color,
            root_offset: DEFAULT_ROOT_OFFSET,
            assigner,
            assignment: SlotAssignment::default(),
            targets: Vec::new(),
        };
        scene.rebuild();
        scene
    }

    pub fn set_content(&mut self, content: &[ContentItem]) {
        self.assigner.set_content(content);
        self.rebuild();
    }

    /// New random permutation of the same content; the host's timer calls this.
    pub fn reshuffle(&mut self) {
        self.assigner.reshuffle();
        self.rebuild();
    }

    pub fn set_layers(&mut self, layers: Vec<Layer>) {
        self.layers = layers;
        self.rebuild();
    }

    pub fn set_root_offset(&mut self, root_offset: Vec3) {
        self.root_offset = root_offset;
        self.rebuild();
    }

    /// Appearance only, the layer geometry is unaffected
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn root_offset(&self) -> Vec3 {
        self.root_offset
    }

    pub fn total_slots(&self) -> usize {
        total_slots(&self.layers)
    }

    pub fn content(&self) -> &[ContentItem] {
        self.assigner.shuffled()
    }

    pub fn assignment(&self) -> &SlotAssignment {
        &self.assignment
    }

    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    /// Every content slot in global order, with its assigned item if any.
    pub fn ornaments(&self) -> Vec<OrnamentPlacement<'_>> {
        let poses: Vec<_> = self
            .layers
            .iter()
            .enumerate()
            .map(|(i, layer)| layer_slot_poses(i, layer, CONTENT_START_ANGLE))
            .collect();

        slot_ids(&self.layers)
            .map(|slot| {
                let layer = &self.layers[slot.layer];
                let pose = &poses[slot.layer][slot.slot];
                OrnamentPlacement {
                    slot,
                    position: slot_world_position(layer, pose, self.root_offset),
                    y_rotation: pose.y_rotation,
                    content: self.assignment.get(slot.global),
                }
            })
            .collect()
    }

    pub fn fillers(&self) -> Vec<FillerPlacement> {
        let root_offset = self.root_offset;
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer_filler_poses(i, layer).into_iter().map(move |filler| {
                    let tree_local = filler.pose.position + Vec3::new(0.0, layer.vertical_offset, 0.0);
                    FillerPlacement {
                        position: tree_local * FILLER_INSET + root_offset,
                        y_rotation: filler.pose.y_rotation,
                        color: filler.color,
                        scale: filler.scale,
                    }
                })
            })
            .collect()
    }

    fn rebuild(&mut self) {
        self.assignment = self.assigner.assignment(self.total_slots());
        self.targets = extract_targets(&self.layers, &self.assignment, self.root_offset);
        debug!(
            "tree rebuilt: {} slots, {} items, {} targets",
            self.total_slots(),
            self.assigner.shuffled().len(),
            self.targets.len()
        );
    }
}
