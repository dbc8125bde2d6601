//! Live set of cards and their current poses

use rand::Rng;

use crate::dataset::Record;
use crate::spatial::{Pose, Vec3};

/// Opaque identifier handed to the rendering side for each card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub u64);

/// One visual card
#[derive(Debug, Clone)]
pub struct Item {
    pub index: usize,
    pub pose: Pose,
    pub record: Record,
    pub handle: RenderHandle,
}

/// Owns every item. Items are only ever replaced as a whole set.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: Vec<Item>,
    generation: u64,
    next_handle: u64,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all items with one per record, in dataset order.
    ///
    /// New cards start scattered uniformly in a cube of half-width `scatter`
    /// around the origin, facing forward.
    pub fn rebuild<R: Rng + ?Sized>(&mut self, records: Vec<Record>, scatter: f64, rng: &mut R) {
        // finite for any finite `scatter`, even when `2 * scatter` is not
        let mut scatter_axis = || {
            if scatter.is_finite() && scatter > 0.0 {
                (rng.gen::<f64>() * 2.0 - 1.0) * scatter
            } else {
                0.0
            }
        };

        let mut items = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let position = Vec3::new(scatter_axis(), scatter_axis(), scatter_axis());
            let handle = RenderHandle(self.next_handle);
            self.next_handle += 1;
            items.push(Item {
                index,
                pose: Pose::at(position),
                record,
                handle,
            });
        }

        self.items = items;
        self.generation += 1;
        tracing::info!(
            items = self.items.len(),
            generation = self.generation,
            "item registry rebuilt"
        );
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of every current pose, in item order
    pub fn poses(&self) -> Vec<Pose> {
        self.items.iter().map(|item| item.pose).collect()
    }

    /// Bumped on every rebuild
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
