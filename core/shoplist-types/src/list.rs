use crate::{CallerId, ListId};
use serde::{Deserialize, Serialize};

/// A shopping list shared between its owner and a fixed set of members.
///
/// Membership is decided at creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ListId,
    pub name: String,
    pub owner: CallerId,
    pub members: Vec<CallerId>,
}

impl ShoppingList {
    /// Creates a list record. Duplicate members are dropped, keeping the
    /// first occurrence so display order follows the request.
    pub fn new(
        id: ListId,
        name: impl Into<String>,
        owner: CallerId,
        members: impl IntoIterator<Item = CallerId>,
    ) -> Self {
        let mut unique: Vec<CallerId> = Vec::new();
        for member in members {
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        Self {
            id,
            name: name.into(),
            owner,
            members: unique,
        }
    }

    /// Returns true if the caller is listed as a member.
    pub fn is_member(&self, caller: &CallerId) -> bool {
        self.members.contains(caller)
    }

    /// Returns true if the caller may work with this list's items:
    /// the owner always may, members may, nobody else may.
    pub fn grants_access(&self, caller: &CallerId) -> bool {
        !caller.is_anonymous() && (self.owner == *caller || self.is_member(caller))
    }
}
