//! Collectible item row.
//!
//! Tracks which items of the row are still active on the host side and
//! refills the whole row once the last one is picked up.

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::game::{ITEM_BOUNCE_MAX, ITEM_BOUNCE_MIN, ITEM_COUNT, ITEM_START_X, ITEM_STEP_X};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub x: f32,
    pub y: f32,
    pub bounce: f32,
    pub active: bool,
}

/// Outcome of reporting an item overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collect {
    /// Unknown index or item already taken.
    Ignored,
    Collected,
    /// The last active item was taken and the row is active again.
    Refilled,
}

#[derive(Debug, Clone)]
pub struct ItemField {
    items: Vec<Item>,
}

impl ItemField {
    /// Build the default row, rolling a bounce per item.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let items = (0..ITEM_COUNT)
            .map(|i| Item {
                x: ITEM_START_X + ITEM_STEP_X * i as f32,
                y: 0.0,
                bounce: rng.random_range(ITEM_BOUNCE_MIN..=ITEM_BOUNCE_MAX),
                active: true,
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.active).count()
    }

    pub fn collect(&mut self, index: usize) -> Collect {
        let Some(item) = self.items.get_mut(index) else {
            return Collect::Ignored;
        };
        if !item.active {
            return Collect::Ignored;
        }
        item.active = false;

        if self.active_count() == 0 {
            for item in self.items.iter_mut() {
                item.active = true;
            }
            return Collect::Refilled;
        }
        Collect::Collected
    }
}
