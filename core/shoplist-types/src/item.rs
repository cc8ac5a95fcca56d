use crate::{ItemId, ListId};
use serde::{Deserialize, Serialize};

/// An entry on a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub checked: bool,
    pub list_id: ListId,
}

impl Item {
    /// Creates an unchecked item on the given list.
    pub fn new(id: ItemId, name: impl Into<String>, list_id: ListId) -> Self {
        Self {
            id,
            name: name.into(),
            checked: false,
            list_id,
        }
    }

    /// Returns true if the item belongs to the given list.
    pub fn belongs_to(&self, list_id: &ListId) -> bool {
        self.list_id == *list_id
    }
}
