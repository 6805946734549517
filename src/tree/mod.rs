//! The decorated tree: band geometry, slot layout, content assignment and
//! tour target extraction.

pub mod assign;
pub mod layers;
pub mod layout;
pub mod scene;
pub mod targets;

pub use assign::{assign_cyclic, ContentAssigner, SlotAssignment, RESHUFFLE_INTERVAL_SECS};
pub use layers::{default_layers, global_index, slot_ids, total_slots, Layer, SlotId, DEFAULT_LAYERS};
pub use layout::{cone_radius, layer_filler_poses, layer_slot_poses, slot_pose, FillerPose, SlotPose};
pub use scene::{FillerPlacement, OrnamentPlacement, TreeScene, DEFAULT_TREE_COLOR};
pub use targets::{extract_targets, DEFAULT_ROOT_OFFSET};
