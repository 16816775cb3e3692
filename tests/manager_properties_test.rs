use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stockroom::application::manager::InventoryManager;
use stockroom::domain::item::{ItemDetails, ItemKind};
use stockroom::domain::ports::{ItemStore, ItemStoreBox};
use stockroom::domain::transaction::Action;
use stockroom::error::InventoryError;
use stockroom::infrastructure::in_memory::{InMemoryItemStore, LEGACY_CAPACITY};
use stockroom::interfaces::flat_file::LoadOptions;
use tempfile::tempdir;

fn details(name: &str, kind: ItemKind, quantity: i64, price: Decimal) -> ItemDetails {
    ItemDetails {
        name: name.to_string(),
        kind,
        quantity,
        price,
    }
}

fn basic(name: &str) -> ItemDetails {
    details(name, ItemKind::Basic, 1, dec!(1.00))
}

#[test]
fn test_length_tracks_adds_minus_removes() {
    let mut manager = InventoryManager::default();
    let mut expected = 0usize;

    for (step, name) in ["Pen", "Cup", "Pen", "Lamp", "Cup"].iter().enumerate() {
        manager.add_item(basic(name)).unwrap();
        expected += 1;
        if step % 2 == 1 && manager.remove_item("Pen").is_ok() {
            expected -= 1;
        }
        assert_eq!(manager.inventory().len(), expected);
    }
    assert!(manager.remove_item("Sofa").is_err());
    assert_eq!(manager.inventory().len(), expected);
}

#[test]
fn test_remove_unknown_name_leaves_store_unchanged() {
    let mut manager = InventoryManager::default();
    manager.add_item(basic("Pen")).unwrap();
    manager.add_item(basic("Cup")).unwrap();
    let before = manager.inventory();

    assert!(matches!(
        manager.remove_item("Never Added"),
        Err(InventoryError::NotFound(name)) if name == "Never Added"
    ));
    assert_eq!(manager.inventory(), before);
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");

    let mut manager = InventoryManager::default();
    manager
        .add_item(details(
            "TV",
            ItemKind::Electronic { warranty_months: 24 },
            3,
            dec!(499.99),
        ))
        .unwrap();
    manager
        .add_item(details(
            "Milk",
            ItemKind::Perishable { shelf_life_days: 3 },
            10,
            dec!(2.50),
        ))
        .unwrap();
    manager.save(&path).unwrap();

    let mut restored = InventoryManager::default();
    assert_eq!(restored.load(&path, &LoadOptions::default()).unwrap(), 2);

    let items = restored.inventory();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "TV");
    assert_eq!(items[0].quantity.value(), 3);
    assert_eq!(items[0].price.value(), dec!(499.99));
    assert_eq!(items[0].kind, ItemKind::Electronic { warranty_months: 12 });
    assert_eq!(items[1].name, "Milk");
    assert_eq!(items[1].quantity.value(), 10);
    assert_eq!(items[1].price.value(), dec!(2.50));
    assert_eq!(items[1].kind, ItemKind::Perishable { shelf_life_days: 7 });
    assert!(restored.transactions().is_empty());
}

#[test]
fn test_load_replaces_existing_items() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");
    std::fs::write(&path, "Basic,Stapler,2,4.25\n").unwrap();

    let mut manager = InventoryManager::default();
    manager.add_item(basic("Pen")).unwrap();
    manager.load(&path, &LoadOptions::default()).unwrap();

    let names: Vec<String> = manager.inventory().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Stapler"]);
}

#[test]
fn test_legacy_capacity() {
    let store: ItemStoreBox = Box::new(InMemoryItemStore::bounded(LEGACY_CAPACITY));
    let mut manager = InventoryManager::new(store);
    for i in 0..LEGACY_CAPACITY {
        manager.add_item(basic(&format!("Item {}", i))).unwrap();
    }

    assert!(matches!(
        manager.add_item(basic("One Too Many")),
        Err(InventoryError::CapacityExceeded { capacity: 100 })
    ));
    assert_eq!(manager.inventory().len(), LEGACY_CAPACITY);
    assert_eq!(manager.transactions().len(), LEGACY_CAPACITY);
}

#[test]
fn test_remove_all_produces_one_removal_per_item() {
    let mut manager = InventoryManager::default();
    for name in ["Pen", "Cup", "Lamp"] {
        manager.add_item(basic(name)).unwrap();
    }
    let before = manager.transactions().len();

    manager.remove_all_items();

    let log = manager.transactions();
    let removals = &log[..log.len() - before];
    assert_eq!(removals.len(), 3);
    assert!(removals.iter().all(|tx| tx.action == Action::Removed));
    let in_removal_order: Vec<&str> = removals
        .iter()
        .rev()
        .map(|tx| tx.item_name.as_str())
        .collect();
    assert_eq!(in_removal_order, vec!["Pen", "Cup", "Lamp"]);
    assert!(manager.inventory().is_empty());
}

#[test]
fn test_store_port_as_trait_object() {
    let mut store: ItemStoreBox = Box::new(InMemoryItemStore::new());
    store.add(basic("Pen").validate().unwrap()).unwrap();

    assert_eq!(store.len(), 1);
    assert!(!store.is_empty());
    assert_eq!(store.find_by_name("Pen").unwrap(), 0);
    assert_eq!(store.get(0).unwrap().name, "Pen");
}
