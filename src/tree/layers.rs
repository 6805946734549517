/// One conical band of the tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Height of the band's centre above the tree origin
    pub vertical_offset: f32,
    pub scale: f32,
    pub radius: f32,
    pub height: f32,
    /// Number of content slots on this band
    pub slot_count: usize,
}

impl Layer {
    pub const fn new(
        vertical_offset: f32,
        scale: f32,
        radius: f32,
        height: f32,
        slot_count: usize,
    ) -> Self {
        Self {
            vertical_offset,
            scale,
            radius,
            height,
            slot_count,
        }
    }

    pub fn effective_radius(&self) -> f32 {
        self.radius * self.scale
    }

    pub fn effective_height(&self) -> f32 {
        self.height * self.scale
    }
}

/// Seven bands, widest at the bottom, 25 content slots in total
pub const DEFAULT_LAYERS: [Layer; 7] = [
    Layer::new(2.5, 2.2, 2.4, 4.0, 7),
    Layer::new(4.2, 2.0, 2.35, 3.9, 6),
    Layer::new(5.9, 1.8, 2.3, 3.8, 4),
    Layer::new(7.6, 1.6, 2.2, 3.7, 3),
    Layer::new(9.2, 1.4, 2.1, 3.6, 2),
    Layer::new(10.8, 1.2, 2.0, 3.4, 2),
    Layer::new(12.3, 1.0, 1.8, 3.2, 1),
];

pub fn default_layers() -> Vec<Layer> {
    DEFAULT_LAYERS.to_vec()
}

pub fn total_slots(layers: &[Layer]) -> usize {
    layers.iter().map(|layer| layer.slot_count).sum()
}

/// Address of a slot both within its layer and across the whole tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    pub layer: usize,
    pub slot: usize,
    pub global: usize,
}

/// Maps `(layer, slot)` to the global slot index, or `None` if out of range.
pub fn global_index(layers: &[Layer], layer: usize, slot: usize) -> Option<usize> {
    let target = layers.get(layer)?;
    if slot >= target.slot_count {
        return None;
    }
    Some(total_slots(&layers[..layer]) + slot)
}

/// Every slot in ascending global order.
pub fn slot_ids(layers: &[Layer]) -> impl Iterator<Item = SlotId> + '_ {
    layers
        .iter()
        .enumerate()
        .scan(0usize, |start, (layer_index, layer)| {
            let first = *start;
            *start += layer.slot_count;
            Some((layer_index, first, layer.slot_count))
        })
        .flat_map(|(layer, first, count)| {
            (0..count).map(move |slot| SlotId {
                layer,
                slot,
                global: first + slot,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layers_slot_total() {
        assert_eq!(total_slots(&DEFAULT_LAYERS), 25);
    }

    #[test]
    fn test_effective_extent() {
        let layer = Layer::new(0.0, 2.0, 1.5, 3.0, 4);
        assert_eq!(layer.effective_radius(), 3.0);
        assert_eq!(layer.effective_height(), 6.0);
    }

    #[test]
    fn test_global_index() {
        let layers = default_layers();
        assert_eq!(global_index(&layers, 0, 0), Some(0));
        assert_eq!(global_index(&layers, 1, 0), Some(7));
        assert_eq!(global_index(&layers, 2, 3), Some(16));
        assert_eq!(global_index(&layers, 6, 0), Some(24));
    }

    #[test]
    fn test_global_index_out_of_range() {
        let layers = default_layers();
        assert_eq!(global_index(&layers, 6, 1), None);
        assert_eq!(global_index(&layers, 7, 0), None);
    }

    #[test]
    fn test_slot_ids_are_dense_and_ordered() {
        let layers = default_layers();
        let ids: Vec<SlotId> = slot_ids(&layers).collect();
        assert_eq!(ids.len(), 25);
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id.global, i);
            assert_eq!(global_index(&layers, id.layer, id.slot), Some(i));
        }
    }

    #[test]
    fn test_slot_ids_skip_empty_layers() {
        let layers = [
            Layer::new(0.0, 1.0, 1.0, 1.0, 2),
            Layer::new(1.0, 1.0, 1.0, 1.0, 0),
            Layer::new(2.0, 1.0, 1.0, 1.0, 1),
        ];
        let ids: Vec<(usize, usize, usize)> =
            slot_ids(&layers).map(|id| (id.layer, id.slot, id.global)).collect();
        assert_eq!(ids, vec![(0, 0, 0), (0, 1, 1), (2, 0, 2)]);
    }
}
