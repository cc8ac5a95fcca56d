//! Access control for shared shopping lists.
//!
//! Two independent axes of authority are evaluated here:
//! - the global [`Role`](shoplist_types::Role) of a caller, looked up through a
//!   [`RoleDirectory`], which gates list creation and deletion
//! - ownership or membership of one specific list, which gates item operations
//!
//! An `Owner`-role caller is not granted access to lists it does not own.

mod directory;
mod error;
mod evaluator;

pub use directory::{RoleDirectory, StaticDirectory};
pub use error::{AccessDenied, DirectoryError};
pub use evaluator::AccessEvaluator;
