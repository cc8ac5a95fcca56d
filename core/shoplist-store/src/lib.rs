//! In-memory storage for shopping lists and their items.
//!
//! # Architecture
//!
//! - [`ShoppingStore`] is the only public entry point. It owns a list registry
//!   and an item registry behind a single coarse lock.
//! - Every operation runs to completion under that lock, so readers never see
//!   an item whose list is gone or a list whose items are half removed.
//! - Ids come from per-registry counters that never go backwards, so ids are
//!   never reused after a deletion.
//!
//! State is volatile and lives only as long as the process.

mod error;
mod items;
mod lists;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::ShoppingStore;
