//! Core type definitions for shared shopping lists.
//!
//! This crate defines the plain data shared by every other layer:
//! - Caller, list, and item identifiers
//! - Global caller roles
//! - The [`ShoppingList`] and [`Item`] records
//!
//! Nothing here enforces access rules or referential integrity; those live in
//! the access, store, and service crates.

mod ids;
mod item;
mod list;
mod role;

pub use ids::{CallerId, ItemId, ListId};
pub use item::Item;
pub use list::ShoppingList;
pub use role::Role;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown role: {0}")]
    UnknownRole(String),
}
