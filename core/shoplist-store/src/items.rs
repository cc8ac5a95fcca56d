//! Item registry.

use shoplist_types::{Item, ItemId, ListId};

/// Owns every item record. Items are kept in creation order.
#[derive(Debug, Default)]
pub(crate) struct ItemRegistry {
    items: Vec<Item>,
    /// Highest sequence number handed out so far. Shared by all lists.
    issued: u64,
}

impl ItemRegistry {
    /// Adds an unchecked item. The caller guarantees `list_id` exists.
    pub(crate) fn add(&mut self, list_id: ListId, name: String) -> Item {
        self.issued += 1;
        let item = Item::new(ItemId::from_sequence(self.issued), name, list_id);
        self.items.push(item.clone());
        item
    }

    /// Looks up an item by id, scoped to one list. An item that exists on a
    /// different list is not a match.
    pub(crate) fn find_in_list(&self, list_id: &ListId, item_id: &ItemId) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.id == *item_id && item.belongs_to(list_id))
    }

    /// Sets the checked flag in place and returns the updated item.
    pub(crate) fn set_checked(
        &mut self,
        list_id: &ListId,
        item_id: &ItemId,
        checked: bool,
    ) -> Option<&Item> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == *item_id && item.belongs_to(list_id))?;
        item.checked = checked;
        Some(item)
    }

    pub(crate) fn for_list<'a>(&'a self, list_id: &'a ListId) -> impl Iterator<Item = &'a Item> {
        self.items.iter().filter(move |item| item.belongs_to(list_id))
    }

    /// Removes every item on the list, returning how many were removed.
    pub(crate) fn remove_all_for_list(&mut self, list_id: &ListId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.belongs_to(list_id));
        before - self.items.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}
