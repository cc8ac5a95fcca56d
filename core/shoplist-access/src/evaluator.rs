//! Access control evaluator.

use crate::directory::RoleDirectory;
use crate::error::AccessDenied;
use shoplist_types::{CallerId, Role, ShoppingList};
use tracing::debug;

/// Decides whether a caller may perform an action.
///
/// Evaluation is pure: no decision changes any state.
pub struct AccessEvaluator<D> {
    directory: D,
}

impl<D: RoleDirectory> AccessEvaluator<D> {
    /// Creates an evaluator over the given directory.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Returns the underlying directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Allows iff the caller's global role equals `required`.
    pub fn require_role(&self, caller: &CallerId, required: Role) -> Result<(), AccessDenied> {
        match self.directory.role_of(caller) {
            Some(role) if role == required => Ok(()),
            held => {
                debug!(caller = %caller, ?held, %required, "Role gate denied");
                Err(AccessDenied::InsufficientRole {
                    caller: caller.clone(),
                    required,
                })
            }
        }
    }

    /// Allows iff the caller owns the list or is one of its members.
    pub fn require_list_access(
        &self,
        caller: &CallerId,
        list: &ShoppingList,
    ) -> Result<(), AccessDenied> {
        if list.grants_access(caller) {
            return Ok(());
        }
        debug!(caller = %caller, list_id = %list.id, "List access denied");
        Err(AccessDenied::NotListMember {
            caller: caller.clone(),
            list: list.id.clone(),
        })
    }
}
