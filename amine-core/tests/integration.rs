//! Integration tests for the item manager add/delete pipeline.

use amine_core::view::{COLUMNS, ItemRow};
use amine_core::{Category, Item, ItemDraft, ItemId, ItemManager, ValidationError};

fn add(
    manager: &mut ItemManager,
    name: &str,
    category: &str,
    price: &str,
) -> Result<ItemId, ValidationError> {
    manager.submit_draft(&ItemDraft::new(name, category, price))
}

fn names(manager: &ItemManager) -> Vec<&str> {
    manager.items().iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn pen_then_duplicate_pen() {
    let mut manager = ItemManager::new();

    let id = add(&mut manager, "Pen", "Stationary", "5").unwrap();
    assert_eq!(id.get(), 1);
    assert_eq!(manager.items().len(), 1);

    let item: &Item = &manager.items()[0];
    assert_eq!(item.name, "Pen");
    assert_eq!(item.category, Category::Stationary);
    assert_eq!(item.price.value(), 5.0);

    let err = add(&mut manager, "pen", "Kitchenware", "1").unwrap_err();
    assert_eq!(err, ValidationError::DuplicateName);
    assert_eq!(manager.error_message(), Some("Item must not be duplicated"));
    assert_eq!(names(&manager), ["Pen"]);
}

#[test]
fn empty_name_never_changes_collection() {
    let mut manager = ItemManager::new();
    add(&mut manager, "Mug", "Kitchenware", "3").unwrap();

    for name in ["", " ", "\t\n"] {
        for category in ["", "Stationary", "bogus"] {
            for price in ["", "1", "-1", "x"] {
                let err = add(&mut manager, name, category, price).unwrap_err();
                assert_eq!(err, ValidationError::EmptyName);
                assert_eq!(manager.error_message(), Some("Item name must not be empty"));
            }
        }
    }
    assert_eq!(names(&manager), ["Mug"]);
}

#[test]
fn duplicate_detection_trims_and_ignores_case() {
    let mut manager = ItemManager::new();
    add(&mut manager, "  Kettle ", "Appliance", "20").unwrap();

    for name in ["kettle", "KETTLE", "  kEtTlE  "] {
        let err = add(&mut manager, name, "Appliance", "20").unwrap_err();
        assert_eq!(err, ValidationError::DuplicateName);
    }
    assert_eq!(manager.items().len(), 1);
}

#[test]
fn invalid_category_is_rejected() {
    let mut manager = ItemManager::new();
    for category in ["", "stationary", "Furniture", " Appliance"] {
        let err = add(&mut manager, "Lamp", category, "10").unwrap_err();
        assert_eq!(err, ValidationError::MissingCategory);
        assert_eq!(manager.error_message(), Some("Please select a category"));
    }
    assert!(manager.items().is_empty());
}

#[test]
fn invalid_price_is_rejected() {
    let mut manager = ItemManager::new();
    for price in ["", "-1", "-0.5", "ten", "1,5"] {
        let err = add(&mut manager, "Lamp", "Appliance", price).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice);
        assert_eq!(manager.error_message(), Some("Price must not be less than 0"));
    }
    assert!(manager.items().is_empty());

    add(&mut manager, "Lamp", "Appliance", "0").unwrap();
    assert_eq!(manager.items()[0].price.value(), 0.0);
}

#[test]
fn valid_add_appends_one_fresh_item() {
    let mut manager = ItemManager::new();
    add(&mut manager, "Pen", "Stationary", "5").unwrap();
    add(&mut manager, "Fork", "Kitchenware", "2").unwrap();
    let _ = add(&mut manager, "", "", "");

    let before = manager.items().len();
    let id = add(&mut manager, "Blender", "Appliance", "49.99").unwrap();

    assert_eq!(manager.items().len(), before + 1);
    assert_eq!(manager.items().last().map(|i| i.id), Some(id));
    assert!(manager.items()[..before].iter().all(|i| i.id != id));
    assert_eq!(manager.error_message(), None);
    assert!(manager.form().name.is_empty());
    assert!(manager.form().category.is_none());
    assert!(manager.form().price.is_empty());
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
    let mut manager = ItemManager::new();
    let a = add(&mut manager, "A", "Stationary", "1").unwrap();
    let b = add(&mut manager, "B", "Kitchenware", "2").unwrap();
    let c = add(&mut manager, "C", "Appliance", "3").unwrap();
    let _ = add(&mut manager, "a", "Stationary", "1");
    assert!(manager.error_message().is_some());

    let removed = manager.delete(b).unwrap();
    assert_eq!(removed.name, "B");
    assert_eq!(manager.error_message(), None);

    let ids: Vec<ItemId> = manager.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, [a, c]);
}

#[test]
fn deleted_name_can_be_added_again_with_new_id() {
    let mut manager = ItemManager::new();
    let first = add(&mut manager, "Pen", "Stationary", "5").unwrap();
    manager.delete(first);

    let second = add(&mut manager, "PEN", "Stationary", "6").unwrap();
    assert_ne!(first, second);
    assert_eq!(second.get(), 2);
}

#[test]
fn table_rows_render_in_insertion_order() {
    let mut manager = ItemManager::new();
    add(&mut manager, "Pen", "Stationary", "5").unwrap();
    add(&mut manager, "Spoon", "Kitchenware", "1.25").unwrap();

    let rows: Vec<ItemRow> = manager
        .items()
        .iter()
        .map(|item| ItemRow::new(item, false))
        .collect();

    assert_eq!(COLUMNS, ["ID", "Name", "Category", "Price", "Action"]);
    assert_eq!(rows[0].cells(), ["1", "Pen", "Stationary", "5", "Delete"]);
    assert_eq!(rows[1].cells(), ["2", "Spoon", "Kitchenware", "1.25", "Delete"]);
}

#[test]
fn items_serialize_as_plain_records() {
    let mut manager = ItemManager::new();
    add(&mut manager, "Pen", "Stationary", "5").unwrap();

    let json = serde_json::to_value(manager.items()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "id": 1, "name": "Pen", "category": "Stationary", "price": 5.0 }])
    );
}
