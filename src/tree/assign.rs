use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::ContentItem;

/// How often the host application should call [`ContentAssigner::reshuffle`].
pub const RESHUFFLE_INTERVAL_SECS: f32 = 5.0 * 60.0;

/// Global slot index -> content, iterated in ascending slot order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotAssignment {
    slots: BTreeMap<usize, ContentItem>,
}

impl SlotAssignment {
    pub fn get(&self, global_index: usize) -> Option<&ContentItem> {
        self.slots.get(&global_index)
    }

    pub fn contains(&self, global_index: usize) -> bool {
        self.slots.contains_key(&global_index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ContentItem)> {
        self.slots.iter().map(|(index, item)| (*index, item))
    }
}

impl FromIterator<(usize, ContentItem)> for SlotAssignment {
    fn from_iter<I: IntoIterator<Item = (usize, ContentItem)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

/// Fills `total_slots` slots by cycling through `ordered`.
///
/// Empty content yields an empty assignment.
pub fn assign_cyclic(ordered: &[ContentItem], total_slots: usize) -> SlotAssignment {
    if ordered.is_empty() {
        return SlotAssignment::default();
    }
    let slots = (0..total_slots)
        .map(|i| (i, ordered[i % ordered.len()].clone()))
        .collect();
    SlotAssignment { slots }
}

/// Keeps a shuffled copy of the content list and hands out cyclic
/// assignments from it.
///
/// The shuffle only changes when content is replaced or [`reshuffle`] is
/// called, so repeated `assignment` calls are stable between those events.
///
/// [`reshuffle`]: ContentAssigner::reshuffle
#[derive(Debug, Clone)]
pub struct ContentAssigner<R = StdRng> {
    rng: R,
    shuffled: Vec<ContentItem>,
}

impl ContentAssigner<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible shuffles for tests and headless runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ContentAssigner<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            shuffled: Vec::new(),
        }
    }

    /// Replaces the content list and shuffles it.
    pub fn set_content(&mut self, content: &[ContentItem]) {
        self.shuffled = content.to_vec();
        self.reshuffle();
    }

    /// Draws a fresh uniform permutation of the current content.
    pub fn reshuffle(&mut self) {
        self.shuffled.shuffle(&mut self.rng);
    }

    pub fn shuffled(&self) -> &[ContentItem] {
        &self.shuffled
    }

    /// Cyclic assignment over the current permutation.
    pub fn assignment(&self, total_slots: usize) -> SlotAssignment {
        assign_cyclic(&self.shuffled, total_slots)
    }

    /// Shuffles `content` and assigns it in one step.
    pub fn assign(&mut self, content: &[ContentItem], total_slots: usize) -> SlotAssignment {
        self.set_content(content);
        self.assignment(total_slots)
    }
}
