//! Resource service for shared shopping lists.
//!
//! Implements the four use cases by composing the store and the access
//! evaluator:
//! - create a list (Owner role)
//! - add an item (list owner or member)
//! - set an item's checked flag (list owner or member)
//! - delete a list and its items (Owner role)
//!
//! Inputs are assumed to be validated by the transport. Every call returns an
//! [`Outcome`] that the transport maps to a status code without reinterpreting.

mod error;
mod outcome;
mod request;
mod service;

pub use error::ServiceError;
pub use outcome::{Outcome, Resource};
pub use request::{AddItem, CreateList, SetItemChecked};
pub use service::ResourceService;
