use pretty_assertions::assert_eq;
use serde_json::json;
use shoplist_access::StaticDirectory;
use shoplist_service::{
    AddItem, CreateList, Outcome, Resource, ResourceService, ServiceError, SetItemChecked,
};
use shoplist_types::{CallerId, Item, ItemId, ListId, Role, ShoppingList};

fn service() -> ResourceService<StaticDirectory> {
    ResourceService::new(StaticDirectory::new([
        (CallerId::from("user1"), Role::Owner),
        (CallerId::from("user2"), Role::Member),
        (CallerId::from("boss"), Role::Owner),
    ]))
}

fn user(id: &str) -> CallerId {
    CallerId::from(id)
}

fn created_list(outcome: Outcome) -> ShoppingList {
    match outcome {
        Outcome::Created(Resource::List(list)) => list,
        other => panic!("expected created list, got {other:?}"),
    }
}

fn created_item(outcome: Outcome) -> Item {
    match outcome {
        Outcome::Created(Resource::Item(item)) => item,
        other => panic!("expected created item, got {other:?}"),
    }
}

const FORBIDDEN_ROLE: &str = "Forbidden: Insufficient permissions";
const FORBIDDEN_LIST: &str = "Forbidden: Access denied";

// ── Create list ───────────────────────────────────────────────────

#[test]
fn owner_creates_list() {
    let svc = service();
    let list = created_list(svc.create_list(&user("user1"), CreateList::named("Groceries")));
    assert_eq!(
        serde_json::to_value(&list).unwrap(),
        json!({"id": "1", "name": "Groceries", "owner": "user1", "members": []})
    );
}

#[test]
fn member_cannot_create_list() {
    let svc = service();
    let outcome = svc.create_list(&user("user2"), CreateList::named("Groceries"));
    assert_eq!(outcome, Outcome::Forbidden(FORBIDDEN_ROLE.to_string()));
    assert_eq!(svc.store().list_count(), 0);
}

#[test]
fn unknown_and_anonymous_callers_cannot_create_list() {
    let svc = service();
    assert!(matches!(
        svc.create_list(&user("stranger"), CreateList::named("x")),
        Outcome::Forbidden(_)
    ));
    assert!(matches!(
        svc.create_list(&CallerId::anonymous(), CreateList::named("x")),
        Outcome::Forbidden(_)
    ));
    assert_eq!(svc.store().list_count(), 0);
}

#[test]
fn create_list_keeps_members() {
    let svc = service();
    let list = created_list(svc.create_list(
        &user("user1"),
        CreateList::named("Party").with_members(["user2", "user3"]),
    ));
    assert_eq!(list.members, vec![user("user2"), user("user3")]);
}

// ── Add item ──────────────────────────────────────────────────────

#[test]
fn add_item_to_missing_list_is_not_found_even_for_strangers() {
    let svc = service();
    let outcome = svc.add_item(&user("stranger"), &ListId::from("1"), AddItem::named("Milk"));
    assert_eq!(outcome, Outcome::NotFound("Shopping list not found".to_string()));
}

#[test]
fn non_member_cannot_add_item() {
    let svc = service();
    let list = created_list(svc.create_list(&user("user1"), CreateList::named("Groceries")));
    let outcome = svc.add_item(&user("user2"), &list.id, AddItem::named("Milk"));
    assert_eq!(outcome, Outcome::Forbidden(FORBIDDEN_LIST.to_string()));
    assert_eq!(svc.store().item_count(), 0);
}

#[test]
fn other_owner_role_cannot_add_to_foreign_list() {
    let svc = service();
    let list = created_list(svc.create_list(&user("user1"), CreateList::named("Groceries")));
    let outcome = svc.add_item(&user("boss"), &list.id, AddItem::named("Milk"));
    assert_eq!(outcome, Outcome::Forbidden(FORBIDDEN_LIST.to_string()));
}

#[test]
fn owner_and_member_can_add_items() {
    let svc = service();
    let list = created_list(svc.create_list(
        &user("user1"),
        CreateList::named("Groceries").with_members(["user2"]),
    ));
    let a = created_item(svc.add_item(&user("user1"), &list.id, AddItem::named("Bread")));
    let b = created_item(svc.add_item(&user("user2"), &list.id, AddItem::named("Milk")));
    assert_eq!(a.id, ItemId::from("1"));
    assert_eq!(b.id, ItemId::from("2"));
    assert_eq!(b.list_id, list.id);
    assert!(!b.checked);
}

// ── Set checked ───────────────────────────────────────────────────

#[test]
fn toggle_round_trip() {
    let svc = service();
    let list = created_list(svc.create_list(
        &user("user1"),
        CreateList::named("Groceries").with_members(["user2"]),
    ));
    let item = created_item(svc.add_item(&user("user2"), &list.id, AddItem::named("Milk")));

    let on = svc.set_item_checked(&user("user2"), &list.id, &item.id, SetItemChecked { checked: true });
    let mut expected = item.clone();
    expected.checked = true;
    assert_eq!(on, Outcome::Ok(Resource::Item(expected)));

    let off = svc.set_item_checked(&user("user1"), &list.id, &item.id, SetItemChecked { checked: false });
    assert_eq!(off, Outcome::Ok(Resource::Item(item)));
}

#[test]
fn toggle_on_missing_list_is_not_found() {
    let svc = service();
    let outcome = svc.set_item_checked(
        &user("user1"),
        &ListId::from("4"),
        &ItemId::from("1"),
        SetItemChecked { checked: true },
    );
    assert_eq!(outcome, Outcome::NotFound("Shopping list not found".to_string()));
}

#[test]
fn toggle_by_non_member_is_forbidden_and_changes_nothing() {
    let svc = service();
    let list = created_list(svc.create_list(&user("user1"), CreateList::named("Groceries")));
    let item = created_item(svc.add_item(&user("user1"), &list.id, AddItem::named("Milk")));

    let outcome = svc.set_item_checked(&user("user2"), &list.id, &item.id, SetItemChecked { checked: true });
    assert_eq!(outcome, Outcome::Forbidden(FORBIDDEN_LIST.to_string()));
    assert!(!svc.store().find_item_in_list(&list.id, &item.id).unwrap().checked);
}

#[test]
fn toggle_by_non_member_on_missing_item_is_forbidden() {
    let svc = service();
    let list = created_list(svc.create_list(&user("user1"), CreateList::named("Groceries")));
    let outcome = svc.set_item_checked(&user("user2"), &list.id, &ItemId::from("9"), SetItemChecked { checked: true });
    assert_eq!(outcome, Outcome::Forbidden(FORBIDDEN_LIST.to_string()));
}

#[test]
fn toggle_item_from_another_list_is_not_found() {
    let svc = service();
    let a = created_list(svc.create_list(&user("user1"), CreateList::named("A")));
    let b = created_list(svc.create_list(&user("user1"), CreateList::named("B")));
    let item = created_item(svc.add_item(&user("user1"), &a.id, AddItem::named("Milk")));

    let outcome = svc.set_item_checked(&user("user1"), &b.id, &item.id, SetItemChecked { checked: true });
    assert_eq!(outcome, Outcome::NotFound("Item not found".to_string()));
}

// ── Delete list ───────────────────────────────────────────────────

#[test]
fn role_gate_precedes_existence_on_delete() {
    let svc = service();
    let outcome = svc.delete_list(&user("user2"), &ListId::from("99"));
    assert_eq!(outcome, Outcome::Forbidden(FORBIDDEN_ROLE.to_string()));
}

#[test]
fn owner_deleting_missing_list_is_not_found() {
    let svc = service();
    let outcome = svc.delete_list(&user("user1"), &ListId::from("99"));
    assert_eq!(outcome, Outcome::NotFound("Shopping list not found".to_string()));
}

#[test]
fn member_cannot_delete_list_even_when_listed() {
    let svc = service();
    let list = created_list(svc.create_list(
        &user("user1"),
        CreateList::named("Groceries").with_members(["user2"]),
    ));
    let outcome = svc.delete_list(&user("user2"), &list.id);
    assert!(matches!(outcome, Outcome::Forbidden(_)));
    assert!(svc.store().find_list(&list.id).is_ok());
}

#[test]
fn delete_cascades_and_later_adds_are_not_found() {
    let svc = service();
    let list = created_list(svc.create_list(&user("user1"), CreateList::named("Groceries")));
    let item = created_item(svc.add_item(&user("user1"), &list.id, AddItem::named("Milk")));

    let outcome = svc.delete_list(&user("user1"), &list.id);
    assert_eq!(outcome, Outcome::Deleted("Shopping list deleted successfully.".to_string()));
    assert!(svc.store().find_item_in_list(&list.id, &item.id).is_err());
    assert_eq!(svc.store().item_count(), 0);

    let again = svc.add_item(&user("user1"), &list.id, AddItem::named("Eggs"));
    assert_eq!(again, Outcome::NotFound("Shopping list not found".to_string()));
}

#[test]
fn ids_are_not_reused_after_delete() {
    let svc = service();
    let a = created_list(svc.create_list(&user("user1"), CreateList::named("A")));
    svc.delete_list(&user("user1"), &a.id);
    let b = created_list(svc.create_list(&user("user1"), CreateList::named("B")));
    assert_ne!(a.id, b.id);
}

// ── Result forms ──────────────────────────────────────────────────

#[test]
fn try_forms_expose_typed_errors() {
    let svc = service();
    let err = svc
        .try_create_list(&user("user2"), CreateList::named("x"))
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::InsufficientRole { caller: user("user2"), required: Role::Owner }
    );
    assert!(err.is_forbidden());

    let err = svc.try_delete_list(&user("user1"), &ListId::from("5")).unwrap_err();
    assert_eq!(err, ServiceError::ListNotFound(ListId::from("5")));
    assert!(err.is_not_found());
}

#[test]
fn try_delete_reports_removed_item_count() {
    let svc = service();
    let list = created_list(svc.create_list(&user("user1"), CreateList::named("L")));
    svc.add_item(&user("user1"), &list.id, AddItem::named("a"));
    svc.add_item(&user("user1"), &list.id, AddItem::named("b"));
    assert_eq!(svc.try_delete_list(&user("user1"), &list.id).unwrap(), 2);
}

// ── Outcome helpers ───────────────────────────────────────────────

#[test]
fn outcome_accessors() {
    let ok = Outcome::Deleted("done".to_string());
    assert!(ok.is_success());
    assert_eq!(ok.message(), Some("done"));
    assert!(ok.resource().is_none());

    let denied = Outcome::Forbidden("no".to_string());
    assert!(!denied.is_success());
    assert_eq!(denied.message(), Some("no"));
}
