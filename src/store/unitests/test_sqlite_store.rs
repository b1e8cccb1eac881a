use std::fs;
use serial_test::serial;

use crate::core::{
    contact::ContactFields,
    Error,
};
use crate::store::{
    ContactStore,
    SqliteStore,
};

fn memory_store() -> SqliteStore {
    let mut store = SqliteStore::new();
    match store.initialize(":memory:") {
        Ok(_) => store,
        Err(e) => panic!("opening db error: {}", e),
    }
}

fn fields(name: &str, number: &str, job: &str, email: &str) -> ContactFields {
    ContactFields::new(name, number, job, email)
}

#[test]
fn test_insert_then_list() {
    let mut db = memory_store();
    assert_eq!(db.list_all().unwrap().len(), 0);

    let ada = fields("Ada", "111", "Engineer", "ada@x.com");
    let id = db.insert(&ada).expect("insert");

    let all = db.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id(), id);
    assert_eq!(all[0].fields(), &ada);
}

#[test]
fn test_insert_blank_and_duplicates() {
    let mut db = memory_store();
    let blank = ContactFields::default();
    let id1 = db.insert(&blank).unwrap();
    let id2 = db.insert(&blank).unwrap();
    assert_ne!(id1, id2);

    let all = db.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|c| c.fields() == &blank));
}

#[test]
fn test_list_keeps_insertion_order() {
    let mut db = memory_store();
    for name in ["Carol", "Ada", "Bob"] {
        db.insert(&fields(name, "", "", "")).unwrap();
    }
    let names = db.list_all().unwrap()
        .iter()
        .map(|c| c.name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Carol", "Ada", "Bob"]);
}

#[test]
fn test_search_substring() {
    let mut db = memory_store();
    db.insert(&fields("Ada", "111", "Engineer", "ada@x.com")).unwrap();
    db.insert(&fields("Bob", "222", "Writer", "bob@x.com")).unwrap();

    let found = db.search("a").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "Ada");

    // LIKE is ASCII case-insensitive.
    let found = db.search("BO").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "Bob");

    assert!(db.search("zed").unwrap().is_empty());
}

#[test]
fn test_search_empty_equals_list_all() {
    let mut db = memory_store();
    db.insert(&fields("Ada", "", "", "")).unwrap();
    db.insert(&fields("Bob", "", "", "")).unwrap();
    assert_eq!(db.search("").unwrap(), db.list_all().unwrap());
}

#[test]
fn test_search_wildcards_are_literal() {
    let mut db = memory_store();
    db.insert(&fields("100% Juice", "", "", "")).unwrap();
    db.insert(&fields("1000 Lakes", "", "", "")).unwrap();
    db.insert(&fields("a_b", "", "", "")).unwrap();
    db.insert(&fields("axb", "", "", "")).unwrap();

    let found = db.search("0%").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "100% Juice");

    let found = db.search("a_b").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "a_b");
}

#[test]
fn test_find_by_name_is_exact() {
    let mut db = memory_store();
    db.insert(&fields("Ada", "111", "", "")).unwrap();
    db.insert(&fields("Adam", "222", "", "")).unwrap();

    let found = db.find_by_name("Ada").unwrap().expect("contact");
    assert_eq!(found.number(), "111");
    assert!(db.find_by_name("ad").unwrap().is_none());
}

#[test]
fn test_update_by_name() {
    let mut db = memory_store();
    let ada_id = db.insert(&fields("Ada", "111", "Engineer", "ada@x.com")).unwrap();
    let bob_id = db.insert(&fields("Bob", "222", "Writer", "bob@x.com")).unwrap();

    let adam = fields("Adam", "333", "Architect", "adam@x.com");
    assert_eq!(db.update_by_name("Ada", &adam).unwrap(), 1);

    let all = db.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id(), ada_id);
    assert_eq!(all[0].fields(), &adam);
    assert_eq!(all[1].id(), bob_id);
    assert_eq!(all[1].name(), "Bob");

    let found = db.search("Ada").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "Adam");
}

#[test]
fn test_update_by_name_no_match() {
    let mut db = memory_store();
    db.insert(&fields("Ada", "", "", "")).unwrap();
    assert_eq!(db.update_by_name("Nobody", &fields("X", "", "", "")).unwrap(), 0);
    assert_eq!(db.list_all().unwrap()[0].name(), "Ada");
}

#[test]
fn test_update_by_name_overwrites_all_matches() {
    let mut db = memory_store();
    db.insert(&fields("Dup", "1", "", "")).unwrap();
    db.insert(&fields("Dup", "2", "", "")).unwrap();
    assert_eq!(db.update_by_name("Dup", &fields("Dup", "9", "", "")).unwrap(), 2);
    assert!(db.list_all().unwrap().iter().all(|c| c.number() == "9"));
}

#[test]
fn test_delete_by_name_removes_every_match() {
    let mut db = memory_store();
    db.insert(&fields("Dup", "1", "", "")).unwrap();
    db.insert(&fields("Keep", "2", "", "")).unwrap();
    db.insert(&fields("Dup", "3", "", "")).unwrap();

    assert_eq!(db.delete_by_name("Dup").unwrap(), 2);
    let all = db.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name(), "Keep");
    assert_eq!(db.delete_by_name("Dup").unwrap(), 0);
}

#[test]
fn test_clear_all() {
    let mut db = memory_store();
    assert_eq!(db.clear_all().unwrap(), 0);
    db.insert(&fields("Ada", "", "", "")).unwrap();
    db.insert(&fields("Bob", "", "", "")).unwrap();
    assert_eq!(db.clear_all().unwrap(), 2);
    assert!(db.list_all().unwrap().is_empty());
}

#[test]
fn test_closed_store_reports_state_error() {
    let mut db = memory_store();
    db.shutdown();
    assert!(!db.is_open());
    match db.list_all() {
        Err(Error::State(_)) => {},
        other => panic!("unexpected result: {:?}", other),
    }
    // Shutting down twice is harmless.
    db.shutdown();
}

#[test]
#[serial]
fn test_reopen_keeps_rows() {
    let path = "unitest_phonebook.db";
    _ = fs::remove_file(path);

    let mut db = SqliteStore::new();
    db.initialize(path).expect("open");
    db.insert(&fields("Ada", "111", "Engineer", "ada@x.com")).unwrap();
    db.shutdown();

    // Initializing an existing file must not touch its rows.
    let mut db = SqliteStore::new();
    db.initialize(path).expect("reopen");
    db.initialize(path).expect("idempotent");
    let all = db.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].email(), "ada@x.com");
    db.shutdown();

    _ = fs::remove_file(path);
}

#[test]
fn test_unopenable_path() {
    let mut db = SqliteStore::new();
    let result = db.initialize("/nonexistent-dir/for/sure/phonebook.db");
    assert!(matches!(result, Err(Error::Db(_))));
    assert!(!db.is_open());
}
