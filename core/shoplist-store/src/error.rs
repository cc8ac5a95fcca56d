//! Error types for the store.

use shoplist_types::{ItemId, ListId};
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No list with this id exists.
    #[error("shopping list not found: {0}")]
    ListNotFound(ListId),

    /// No item with this id exists on the given list.
    #[error("item {item} not found on list {list}")]
    ItemNotFound { list: ListId, item: ItemId },
}
