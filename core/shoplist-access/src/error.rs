//! Error types for directory loading and access decisions.

use shoplist_types::{CallerId, ListId, Role};
use std::path::PathBuf;
use thiserror::Error;

/// A denied access decision.
///
/// Carries who was denied and why, never the contents of the resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// The caller does not hold the global role the action needs.
    #[error("caller '{caller}' lacks role {required}")]
    InsufficientRole { caller: CallerId, required: Role },

    /// The caller is neither the owner nor a member of the list.
    #[error("caller '{caller}' is not the owner or a member of list {list}")]
    NotListMember { caller: CallerId, list: ListId },
}

/// Errors that can occur while building a role directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory file could not be read.
    #[error("failed to read directory file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory file is not valid TOML or has the wrong shape.
    #[error("failed to parse directory: {0}")]
    Parse(#[from] toml::de::Error),

    /// A user entry names a role that does not exist.
    #[error("invalid role for caller {caller:?}: {source}")]
    UnknownRole {
        caller: String,
        #[source]
        source: shoplist_types::Error,
    },

    /// A user entry has an empty caller id.
    #[error("caller ids must not be empty")]
    EmptyCallerId,
}
