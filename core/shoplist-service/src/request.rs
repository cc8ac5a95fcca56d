//! Validated request payloads.

use shoplist_types::CallerId;

/// Create a list owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateList {
    pub name: String,
    pub members: Vec<CallerId>,
}

impl CreateList {
    /// A list request with no members.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Adds members to the request.
    pub fn with_members<I, C>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CallerId>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }
}

/// Add an item to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
    pub name: String,
}

impl AddItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Set an item's checked flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetItemChecked {
    pub checked: bool,
}
