//! Results handed back to the transport.

use serde::Serialize;
use shoplist_types::{Item, ShoppingList};

/// A resource returned on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    List(ShoppingList),
    Item(Item),
}

/// Result of a use case.
///
/// The transport maps `Created` to 201, `Ok` and `Deleted` to 200,
/// `NotFound` to 404, and `Forbidden` to 403.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(Resource),
    Ok(Resource),
    NotFound(String),
    Forbidden(String),
    Deleted(String),
}

impl Outcome {
    /// Returns true for `Created`, `Ok`, and `Deleted`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Ok(_) | Self::Deleted(_))
    }

    /// Returns the resource carried by `Created` or `Ok`.
    pub fn resource(&self) -> Option<&Resource> {
        match self {
            Self::Created(resource) | Self::Ok(resource) => Some(resource),
            _ => None,
        }
    }

    /// Returns the message carried by `NotFound`, `Forbidden`, or `Deleted`.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NotFound(msg) | Self::Forbidden(msg) | Self::Deleted(msg) => Some(msg),
            _ => None,
        }
    }
}
