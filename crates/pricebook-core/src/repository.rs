use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::{Item, ReplaceOutcome};

/// In-memory, insertion-ordered item store.
///
/// The repository exclusively owns its vector behind a single mutex. Every
/// operation holds the lock for the whole scan + mutation, so concurrent
/// handlers never observe or produce a torn update. Lookups are linear and
/// first-match-wins; duplicate ids are allowed.
#[derive(Debug, Default)]
pub struct ItemRepository {
    items: Mutex<Vec<Item>>,
}

impl ItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with `items`, in order.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    // No operation can leave the vector half-mutated, so a poisoned lock
    // still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the full collection in insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// First item whose id equals `id`, if any.
    pub fn find(&self, id: &str) -> Option<Item> {
        self.lock().iter().find(|item| item.id == id).cloned()
    }

    /// First item whose id equals `id`, or the zero-valued item when absent.
    pub fn get_by_id(&self, id: &str) -> Item {
        self.find(id).unwrap_or_default()
    }

    /// Append `item` as given, including an empty or duplicate id.
    pub fn create(&self, item: Item) -> Item {
        self.lock().push(item.clone());
        tracing::debug!(id = %item.id, "Item created");
        item
    }

    /// Remove the first item matching `id` and append `item` in its place at
    /// the end of the collection, with its id forced to `id`.
    ///
    /// On a miss nothing changes and the current collection is returned.
    pub fn replace_by_id(&self, id: &str, mut item: Item) -> ReplaceOutcome {
        let mut items = self.lock();
        match items.iter().position(|existing| existing.id == id) {
            Some(index) => {
                items.remove(index);
                item.id = id.to_string();
                items.push(item.clone());
                tracing::debug!(id, "Item replaced");
                ReplaceOutcome::Replaced(item)
            }
            None => {
                tracing::debug!(id, "Replace target not found");
                ReplaceOutcome::Unchanged(items.clone())
            }
        }
    }

    /// Remove the first item matching `id` and return the resulting collection.
    ///
    /// Later items sharing the same id are left in place.
    pub fn delete_by_id(&self, id: &str) -> Vec<Item> {
        let mut items = self.lock();
        match items.iter().position(|existing| existing.id == id) {
            Some(index) => {
                items.remove(index);
                tracing::debug!(id, "Item deleted");
            }
            None => tracing::debug!(id, "Delete target not found"),
        }
        items.clone()
    }
}
