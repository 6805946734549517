use glam::Vec3;

use super::assign::SlotAssignment;
use super::layers::Layer;
use super::layout::{layer_slot_poses, SlotPose};

/// Content slots are laid out from angle zero on every layer
pub const CONTENT_START_ANGLE: f32 = 0.0;

/// Scene group (-1.8) plus the tree's local lift (2.3)
pub const DEFAULT_ROOT_OFFSET: Vec3 = Vec3::new(0.0, 0.5, 0.0);

/// Moves a layer-local slot position into scene-root space.
pub fn slot_world_position(layer: &Layer, pose: &SlotPose, root_offset: Vec3) -> Vec3 {
    pose.position + Vec3::new(0.0, layer.vertical_offset, 0.0) + root_offset
}

/// World-space focus points for every occupied slot, in ascending global
/// slot order.
///
/// The result always replaces any previous target list wholesale.
pub fn extract_targets(layers: &[Layer], assignment: &SlotAssignment, root_offset: Vec3) -> Vec<Vec3> {
    if assignment.is_empty() {
        return Vec::new();
    }

    let mut targets = Vec::with_capacity(assignment.len());
    let mut global = 0usize;
    for (layer_index, layer) in layers.iter().enumerate() {
        let first = global;
        global += layer.slot_count;
        if !(first..global).any(|i| assignment.contains(i)) {
            continue;
        }
        for (slot, pose) in layer_slot_poses(layer_index, layer, CONTENT_START_ANGLE)
            .iter()
            .enumerate()
        {
            if assignment.contains(first + slot) {
                targets.push(slot_world_position(layer, pose, root_offset));
            }
        }
    }
    targets
}
