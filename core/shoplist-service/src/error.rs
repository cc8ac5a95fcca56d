//! Error types for the resource service.

use crate::outcome::Outcome;
use shoplist_access::AccessDenied;
use shoplist_store::StoreError;
use shoplist_types::{CallerId, ItemId, ListId, Role};
use thiserror::Error;

/// Failure of a use case.
///
/// The display text is the user-facing message; internal detail stays in the
/// variant fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The caller lacks the global role the action needs.
    #[error("Forbidden: Insufficient permissions")]
    InsufficientRole { caller: CallerId, required: Role },

    /// The caller is not the owner or a member of the list.
    #[error("Forbidden: Access denied")]
    ListAccessDenied { caller: CallerId, list: ListId },

    /// The addressed list does not exist.
    #[error("Shopping list not found")]
    ListNotFound(ListId),

    /// The addressed item does not exist on the addressed list.
    #[error("Item not found")]
    ItemNotFound { list: ListId, item: ItemId },
}

impl ServiceError {
    /// Returns true for authorization failures.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::InsufficientRole { .. } | Self::ListAccessDenied { .. })
    }

    /// Returns true for missing resources.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_) | Self::ItemNotFound { .. })
    }

    /// Converts the failure into the outcome reported to the transport.
    pub fn into_outcome(self) -> Outcome {
        let message = self.to_string();
        if self.is_forbidden() {
            Outcome::Forbidden(message)
        } else {
            Outcome::NotFound(message)
        }
    }
}

impl From<AccessDenied> for ServiceError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::InsufficientRole { caller, required } => {
                Self::InsufficientRole { caller, required }
            }
            AccessDenied::NotListMember { caller, list } => Self::ListAccessDenied { caller, list },
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ListNotFound(list) => Self::ListNotFound(list),
            StoreError::ItemNotFound { list, item } => Self::ItemNotFound { list, item },
        }
    }
}
