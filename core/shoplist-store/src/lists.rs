//! List registry.

use shoplist_types::{CallerId, ListId, ShoppingList};
use std::collections::HashMap;

/// Owns every shopping list record.
#[derive(Debug, Default)]
pub(crate) struct ListRegistry {
    lists: HashMap<ListId, ShoppingList>,
    /// Highest sequence number handed out so far.
    issued: u64,
}

impl ListRegistry {
    /// Creates a list with the next id.
    pub(crate) fn create(
        &mut self,
        name: String,
        owner: CallerId,
        members: Vec<CallerId>,
    ) -> ShoppingList {
        self.issued += 1;
        let list = ShoppingList::new(ListId::from_sequence(self.issued), name, owner, members);
        self.lists.insert(list.id.clone(), list.clone());
        list
    }

    pub(crate) fn find(&self, id: &ListId) -> Option<&ShoppingList> {
        self.lists.get(id)
    }

    pub(crate) fn contains(&self, id: &ListId) -> bool {
        self.lists.contains_key(id)
    }

    /// Removes a list. Callers must cascade to the item registry in the same
    /// critical section.
    pub(crate) fn remove(&mut self, id: &ListId) -> Option<ShoppingList> {
        self.lists.remove(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.lists.len()
    }
}
