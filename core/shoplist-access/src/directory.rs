//! Identity/role directory.
//!
//! The directory is built once at startup and is read-only afterwards.
//! [`RoleDirectory`] is the seam where a real identity provider would plug in.

use crate::error::DirectoryError;
use serde::Deserialize;
use shoplist_types::{CallerId, Role};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Maps caller identifiers to their global role.
pub trait RoleDirectory: Send + Sync {
    /// Returns the caller's role, or `None` for unknown callers.
    fn role_of(&self, caller: &CallerId) -> Option<Role>;
}

/// Fixed lookup table of caller roles.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    roles: HashMap<CallerId, Role>,
}

impl StaticDirectory {
    /// Builds a directory from explicit entries.
    /// Anonymous (empty) caller ids are ignored.
    pub fn new(entries: impl IntoIterator<Item = (CallerId, Role)>) -> Self {
        let roles = entries
            .into_iter()
            .filter(|(caller, _)| !caller.is_anonymous())
            .collect();
        Self { roles }
    }

    /// The default table: `user1` is an Owner, `user2` a Member.
    pub fn builtin() -> Self {
        Self::new([
            (CallerId::from("user1"), Role::Owner),
            (CallerId::from("user2"), Role::Member),
        ])
    }

    /// Loads a directory from a TOML file with a `[users]` table.
    pub fn load_from(path: &Path) -> Result<Self, DirectoryError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), users = directory.len(), "Loaded role directory");
        Ok(directory)
    }

    /// Parses a directory from TOML text.
    ///
    /// ```toml
    /// [users]
    /// user1 = "Owner"
    /// user2 = "Member"
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self, DirectoryError> {
        let file: DirectoryFile = toml::from_str(contents)?;
        let mut roles = HashMap::with_capacity(file.users.len());
        for (caller, role) in file.users {
            if caller.is_empty() {
                return Err(DirectoryError::EmptyCallerId);
            }
            let role = Role::from_str(&role).map_err(|source| DirectoryError::UnknownRole {
                caller: caller.clone(),
                source,
            })?;
            roles.insert(CallerId::from(caller), role);
        }
        Ok(Self { roles })
    }

    /// Number of known callers.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns true if no caller is known.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl RoleDirectory for StaticDirectory {
    fn role_of(&self, caller: &CallerId) -> Option<Role> {
        self.roles.get(caller).copied()
    }
}

/// Raw TOML structure of a directory file.
#[derive(Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    users: HashMap<String, String>,
}
