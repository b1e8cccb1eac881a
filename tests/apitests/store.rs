use serial_test::serial;

use phonebook::{
    ContactFields,
    ContactStore,
    SqliteStore,
};

use crate::{
    working_path,
    remove_working_path,
};

fn open_store(dir: &str) -> (SqliteStore, String) {
    let path = format!("{}/phonebook.db", working_path(dir));
    let mut store = SqliteStore::new();
    store.initialize(&path).expect("Failed to open contact store");
    (store, path)
}

#[test]
#[serial]
fn test_insert_list_roundtrip() {
    let dir = "apitests_roundtrip";
    let (mut store, _) = open_store(dir);

    let before = store.list_all().unwrap().len();
    let ada = ContactFields::new("Ada", "111", "Engineer", "ada@x.com");
    let id = store.insert(&ada).unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), before + 1);
    let stored = all.iter().find(|c| c.id() == id).expect("inserted contact");
    assert_eq!(stored.fields(), &ada);

    store.shutdown();
    remove_working_path(dir);
}

#[test]
#[serial]
fn test_search_scenario() {
    let dir = "apitests_search";
    let (mut store, _) = open_store(dir);

    store.insert(&ContactFields::new("Ada", "111", "Engineer", "ada@x.com")).unwrap();
    store.insert(&ContactFields::new("Bob", "222", "Writer", "bob@x.com")).unwrap();

    let found = store.search("a").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "Ada");
    assert_eq!(store.search("").unwrap(), store.list_all().unwrap());

    store.shutdown();
    remove_working_path(dir);
}

#[test]
#[serial]
fn test_rename_scenario() {
    let dir = "apitests_rename";
    let (mut store, _) = open_store(dir);

    store.insert(&ContactFields::new("Ada", "111", "Engineer", "ada@x.com")).unwrap();
    let updated = store.update_by_name("Ada", &ContactFields::new("Adam", "111", "Engineer", "ada@x.com")).unwrap();
    assert_eq!(updated, 1);

    let found = store.search("Ada").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "Adam");

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name(), "Adam");

    store.shutdown();
    remove_working_path(dir);
}

#[test]
#[serial]
fn test_duplicate_names_deleted_together() {
    let dir = "apitests_duplicates";
    let (mut store, _) = open_store(dir);

    store.insert(&ContactFields::new("Dup", "1", "", "")).unwrap();
    store.insert(&ContactFields::new("Dup", "2", "", "")).unwrap();
    store.insert(&ContactFields::new("Other", "3", "", "")).unwrap();

    assert_eq!(store.delete_by_name("Dup").unwrap(), 2);
    let all = store.list_all().unwrap();
    assert!(all.iter().all(|c| c.name() != "Dup"));
    assert_eq!(all.len(), 1);

    store.shutdown();
    remove_working_path(dir);
}

#[test]
#[serial]
fn test_clear_all_then_reopen() {
    let dir = "apitests_clear";
    let (mut store, path) = open_store(dir);

    store.insert(&ContactFields::new("Ada", "", "", "")).unwrap();
    store.clear_all().unwrap();
    assert!(store.list_all().unwrap().is_empty());
    store.shutdown();

    let mut store = SqliteStore::new();
    store.initialize(&path).unwrap();
    assert!(store.list_all().unwrap().is_empty());
    store.insert(&ContactFields::new("Bob", "", "", "")).unwrap();
    assert_eq!(store.list_all().unwrap().len(), 1);

    store.shutdown();
    remove_working_path(dir);
}
