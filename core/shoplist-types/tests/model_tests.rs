use pretty_assertions::assert_eq;
use serde_json::json;
use shoplist_types::{CallerId, Error, Item, ItemId, ListId, Role, ShoppingList};
use std::str::FromStr;

fn caller(id: &str) -> CallerId {
    CallerId::from(id)
}

// ── Role ──────────────────────────────────────────────────────────

#[test]
fn role_parses_canonical_spellings() {
    assert_eq!(Role::from_str("Owner").unwrap(), Role::Owner);
    assert_eq!(Role::from_str("Member").unwrap(), Role::Member);
}

#[test]
fn role_rejects_other_spellings() {
    assert_eq!(
        Role::from_str("owner"),
        Err(Error::UnknownRole("owner".to_string()))
    );
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn role_display_matches_serde() {
    for role in [Role::Owner, Role::Member] {
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, format!("\"{role}\""));
    }
}

// ── ShoppingList ──────────────────────────────────────────────────

#[test]
fn list_serializes_with_original_field_names() {
    let list = ShoppingList::new(ListId::from_sequence(1), "Groceries", caller("user1"), []);
    assert_eq!(
        serde_json::to_value(&list).unwrap(),
        json!({"id": "1", "name": "Groceries", "owner": "user1", "members": []})
    );
}

#[test]
fn list_drops_duplicate_members_keeping_order() {
    let list = ShoppingList::new(
        ListId::from_sequence(1),
        "Party",
        caller("user1"),
        [caller("b"), caller("a"), caller("b")],
    );
    assert_eq!(list.members, vec![caller("b"), caller("a")]);
}

#[test]
fn owner_has_access_without_membership() {
    let list = ShoppingList::new(ListId::from_sequence(1), "L", caller("user1"), []);
    assert!(list.grants_access(&caller("user1")));
    assert!(!list.is_member(&caller("user1")));
}

#[test]
fn member_has_access() {
    let list = ShoppingList::new(ListId::from_sequence(1), "L", caller("user1"), [caller("user2")]);
    assert!(list.grants_access(&caller("user2")));
}

#[test]
fn stranger_has_no_access() {
    let list = ShoppingList::new(ListId::from_sequence(1), "L", caller("user1"), [caller("user2")]);
    assert!(!list.grants_access(&caller("user3")));
}

#[test]
fn anonymous_never_has_access() {
    let list = ShoppingList::new(ListId::from_sequence(1), "L", caller("user1"), []);
    assert!(!list.grants_access(&CallerId::anonymous()));
}

// ── Item ──────────────────────────────────────────────────────────

#[test]
fn new_item_is_unchecked() {
    let item = Item::new(ItemId::from_sequence(1), "Milk", ListId::from_sequence(1));
    assert!(!item.checked);
    assert!(item.belongs_to(&ListId::from_sequence(1)));
    assert!(!item.belongs_to(&ListId::from_sequence(2)));
}

#[test]
fn item_serializes_list_id_in_camel_case() {
    let item = Item::new(ItemId::from_sequence(1), "Milk", ListId::from_sequence(1));
    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        json!({"id": "1", "name": "Milk", "checked": false, "listId": "1"})
    );
}
