//! Identifier types used throughout the shopping list core.
//!
//! List and item ids are the decimal form of a per-registry sequence number.
//! Caller ids are opaque strings handed in by the transport.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier, returning the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Opaque identifier of the caller making a request.
    ///
    /// The empty id stands for an anonymous caller: it never resolves to a
    /// role and never matches a list owner or member.
    CallerId
);

string_id!(
    /// Identifier of a shopping list.
    ListId
);

string_id!(
    /// Identifier of an item. Item ids are global, not scoped per list.
    ItemId
);

impl CallerId {
    /// The caller used when a request carries no identity.
    #[must_use]
    pub fn anonymous() -> Self {
        Self(String::new())
    }

    /// Returns true for the anonymous caller.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.0.is_empty()
    }
}

impl ListId {
    /// Builds the id for the given registry sequence number.
    #[must_use]
    pub fn from_sequence(seq: u64) -> Self {
        Self(seq.to_string())
    }
}

impl ItemId {
    /// Builds the id for the given registry sequence number.
    #[must_use]
    pub fn from_sequence(seq: u64) -> Self {
        Self(seq.to_string())
    }
}
