//! The resource service orchestrator.

use crate::error::ServiceError;
use crate::outcome::{Outcome, Resource};
use crate::request::{AddItem, CreateList, SetItemChecked};
use shoplist_access::{AccessEvaluator, RoleDirectory};
use shoplist_store::ShoppingStore;
use shoplist_types::{CallerId, Item, ItemId, ListId, Role, ShoppingList};
use tracing::{debug, info};

const LIST_DELETED: &str = "Shopping list deleted successfully.";

/// Implements the shopping list use cases.
///
/// Ordering rules:
/// - role gates (create, delete) run before anything touches the store
/// - list-scoped gates (add, toggle) run only after the list is resolved, so a
///   missing list is always reported as not found, never as forbidden
pub struct ResourceService<D> {
    store: ShoppingStore,
    access: AccessEvaluator<D>,
}

impl<D: RoleDirectory> ResourceService<D> {
    /// Creates a service over an empty store.
    pub fn new(directory: D) -> Self {
        Self::with_store(ShoppingStore::new(), directory)
    }

    /// Creates a service over an existing store handle.
    pub fn with_store(store: ShoppingStore, directory: D) -> Self {
        Self {
            store,
            access: AccessEvaluator::new(directory),
        }
    }

    /// Returns the store handle.
    pub fn store(&self) -> &ShoppingStore {
        &self.store
    }

    /// Returns the access evaluator.
    pub fn access(&self) -> &AccessEvaluator<D> {
        &self.access
    }

    // ── Use cases ────────────────────────────────────────────────

    /// Creates a list owned by the caller. Requires the Owner role.
    pub fn create_list(&self, caller: &CallerId, request: CreateList) -> Outcome {
        report(caller, None, None, self.try_create_list(caller, request))
            .map_or_else(ServiceError::into_outcome, |list| {
                Outcome::Created(Resource::List(list))
            })
    }

    /// Adds an item to a list the caller owns or belongs to.
    pub fn add_item(&self, caller: &CallerId, list_id: &ListId, request: AddItem) -> Outcome {
        report(caller, Some(list_id), None, self.try_add_item(caller, list_id, request))
            .map_or_else(ServiceError::into_outcome, |item| {
                Outcome::Created(Resource::Item(item))
            })
    }

    /// Sets the checked flag of an item on a list the caller owns or belongs to.
    pub fn set_item_checked(
        &self,
        caller: &CallerId,
        list_id: &ListId,
        item_id: &ItemId,
        request: SetItemChecked,
    ) -> Outcome {
        let result = self.try_set_item_checked(caller, list_id, item_id, request);
        report(caller, Some(list_id), Some(item_id), result)
            .map_or_else(ServiceError::into_outcome, |item| Outcome::Ok(Resource::Item(item)))
    }

    /// Deletes a list and all of its items. Requires the Owner role.
    pub fn delete_list(&self, caller: &CallerId, list_id: &ListId) -> Outcome {
        report(caller, Some(list_id), None, self.try_delete_list(caller, list_id))
            .map_or_else(ServiceError::into_outcome, |_| {
                Outcome::Deleted(LIST_DELETED.to_string())
            })
    }

    // ── Result-returning forms ───────────────────────────────────

    /// Create-list as a `Result`.
    pub fn try_create_list(
        &self,
        caller: &CallerId,
        request: CreateList,
    ) -> Result<ShoppingList, ServiceError> {
        self.access.require_role(caller, Role::Owner)?;
        let list = self
            .store
            .create_list(request.name, caller.clone(), request.members);
        info!(caller = %caller, list_id = %list.id, members = list.members.len(), "List created");
        Ok(list)
    }

    /// Add-item as a `Result`.
    pub fn try_add_item(
        &self,
        caller: &CallerId,
        list_id: &ListId,
        request: AddItem,
    ) -> Result<Item, ServiceError> {
        let item = self
            .store
            .add_item_if_permitted(list_id, request.name, |list| {
                self.access
                    .require_list_access(caller, list)
                    .map_err(ServiceError::from)
            })?;
        info!(caller = %caller, list_id = %list_id, item_id = %item.id, "Item added");
        Ok(item)
    }

    /// Set-checked as a `Result`.
    pub fn try_set_item_checked(
        &self,
        caller: &CallerId,
        list_id: &ListId,
        item_id: &ItemId,
        request: SetItemChecked,
    ) -> Result<Item, ServiceError> {
        let item = self.store.set_checked_if_permitted(
            list_id,
            item_id,
            request.checked,
            |list| {
                self.access
                    .require_list_access(caller, list)
                    .map_err(ServiceError::from)
            },
        )?;
        info!(
            caller = %caller,
            list_id = %list_id,
            item_id = %item_id,
            checked = item.checked,
            "Item updated"
        );
        Ok(item)
    }

    /// Delete-list as a `Result`, yielding the number of items removed.
    pub fn try_delete_list(
        &self,
        caller: &CallerId,
        list_id: &ListId,
    ) -> Result<usize, ServiceError> {
        self.access.require_role(caller, Role::Owner)?;
        let removed = self.store.delete_list(list_id)?;
        info!(caller = %caller, list_id = %list_id, items_removed = removed, "List deleted");
        Ok(removed)
    }
}

fn report<T>(
    caller: &CallerId,
    list_id: Option<&ListId>,
    item_id: Option<&ItemId>,
    result: Result<T, ServiceError>,
) -> Result<T, ServiceError> {
    if let Err(err) = &result {
        debug!(
            caller = %caller,
            list_id = list_id.map(ListId::as_str),
            item_id = item_id.map(ItemId::as_str),
            forbidden = err.is_forbidden(),
            error = ?err,
            "Request rejected"
        );
    }
    result
}
