//! Cart
//!
//! Append-only list of selected dishes for the current session.

use crate::models::ItemId;

/// Ordered cart contents. Duplicates are kept; nothing is ever removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: Vec<ItemId>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the end
    pub fn add_to_cart(&mut self, item: ItemId) {
        self.items.push(item);
    }

    /// Owned copy of the current contents
    pub fn items(&self) -> Vec<ItemId> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
