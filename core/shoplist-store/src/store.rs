//! The shared store handle.

use crate::error::{StoreError, StoreResult};
use crate::items::ItemRegistry;
use crate::lists::ListRegistry;
use shoplist_types::{CallerId, Item, ItemId, ListId, ShoppingList};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct StoreState {
    lists: ListRegistry,
    items: ItemRegistry,
}

/// Cloneable handle to the list and item registries.
///
/// All clones share the same state. Mutations take the write lock for their
/// whole duration; lookups take the read lock.
#[derive(Debug, Clone, Default)]
pub struct ShoppingStore {
    state: Arc<RwLock<StoreState>>,
}

impl ShoppingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // No operation panics while holding the lock, so a poisoned lock still
    // guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Lists ────────────────────────────────────────────────────

    /// Creates a list owned by `owner` and returns it.
    pub fn create_list(
        &self,
        name: impl Into<String>,
        owner: CallerId,
        members: Vec<CallerId>,
    ) -> ShoppingList {
        self.write().lists.create(name.into(), owner, members)
    }

    /// Returns a snapshot of the list.
    pub fn find_list(&self, id: &ListId) -> StoreResult<ShoppingList> {
        self.read()
            .lists
            .find(id)
            .cloned()
            .ok_or_else(|| StoreError::ListNotFound(id.clone()))
    }

    /// Deletes the list and every item on it as one step.
    /// Returns the number of items removed.
    pub fn delete_list(&self, id: &ListId) -> StoreResult<usize> {
        let mut state = self.write();
        if state.lists.remove(id).is_none() {
            return Err(StoreError::ListNotFound(id.clone()));
        }
        let removed = state.items.remove_all_for_list(id);
        debug!(list_id = %id, items_removed = removed, "Deleted list");
        Ok(removed)
    }

    /// Number of lists currently stored.
    pub fn list_count(&self) -> usize {
        self.read().lists.len()
    }

    // ── Items ────────────────────────────────────────────────────

    /// Adds an unchecked item to an existing list.
    ///
    /// List existence is checked under the same lock as the insert, so an
    /// item can never be attached to a list that is concurrently deleted.
    pub fn add_item(&self, list_id: &ListId, name: impl Into<String>) -> StoreResult<Item> {
        self.add_item_if_permitted(list_id, name, |_| Ok(()))
    }

    /// Resolves the list, runs `authorize` against it, then adds the item,
    /// all inside one critical section.
    ///
    /// A missing list is reported before `authorize` is consulted.
    pub fn add_item_if_permitted<E>(
        &self,
        list_id: &ListId,
        name: impl Into<String>,
        authorize: impl FnOnce(&ShoppingList) -> Result<(), E>,
    ) -> Result<Item, E>
    where
        E: From<StoreError>,
    {
        let mut state = self.write();
        let list = state
            .lists
            .find(list_id)
            .ok_or_else(|| StoreError::ListNotFound(list_id.clone()))?;
        authorize(list)?;
        Ok(state.items.add(list_id.clone(), name.into()))
    }

    /// Returns a snapshot of the item, scoped to the given list.
    pub fn find_item_in_list(&self, list_id: &ListId, item_id: &ItemId) -> StoreResult<Item> {
        self.read()
            .items
            .find_in_list(list_id, item_id)
            .cloned()
            .ok_or_else(|| item_not_found(list_id, item_id))
    }

    /// Sets an item's checked flag and returns the updated item.
    pub fn set_checked(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        checked: bool,
    ) -> StoreResult<Item> {
        self.set_checked_if_permitted(list_id, item_id, checked, |_| Ok(()))
    }

    /// Resolves the list, runs `authorize` against it, then resolves the item
    /// on that list and sets its checked flag, all inside one critical section.
    ///
    /// Checks run in order: list exists, `authorize` allows, item is on list.
    pub fn set_checked_if_permitted<E>(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        checked: bool,
        authorize: impl FnOnce(&ShoppingList) -> Result<(), E>,
    ) -> Result<Item, E>
    where
        E: From<StoreError>,
    {
        let mut state = self.write();
        let list = state
            .lists
            .find(list_id)
            .ok_or_else(|| StoreError::ListNotFound(list_id.clone()))?;
        authorize(list)?;
        let item = state
            .items
            .set_checked(list_id, item_id, checked)
            .cloned()
            .ok_or_else(|| item_not_found(list_id, item_id))?;
        Ok(item)
    }

    /// Returns the list's items in creation order.
    pub fn items_for_list(&self, list_id: &ListId) -> StoreResult<Vec<Item>> {
        let state = self.read();
        if !state.lists.contains(list_id) {
            return Err(StoreError::ListNotFound(list_id.clone()));
        }
        Ok(state.items.for_list(list_id).cloned().collect())
    }

    /// Number of items currently stored across all lists.
    pub fn item_count(&self) -> usize {
        self.read().items.len()
    }
}

fn item_not_found(list_id: &ListId, item_id: &ItemId) -> StoreError {
    StoreError::ItemNotFound {
        list: list_id.clone(),
        item: item_id.clone(),
    }
}
