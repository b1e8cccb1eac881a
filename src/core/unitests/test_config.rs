use std::fs;
use log::LevelFilter;
use serial_test::serial;

use crate::core::{
    default_configuration::{Builder, DEFAULT_DATABASE, DEFAULT_LOG_FILE},
    Error,
};

#[test]
fn test_defaults() {
    let cfg = Builder::new().build().expect("config");
    assert_eq!(cfg.database_path(), DEFAULT_DATABASE);
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file(), Some(DEFAULT_LOG_FILE));
}

#[test]
fn test_builder_overrides() {
    let cfg = Builder::new()
        .with_database("friends.db")
        .with_logger(LevelFilter::Debug, Some("friends.log"))
        .build()
        .expect("config");
    assert_eq!(cfg.database_path(), "friends.db");
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("friends.log"));
}

#[test]
fn test_empty_database_rejected() {
    let result = Builder::new().with_database("  ").build();
    assert!(matches!(result, Err(Error::Argument(_))));
}

#[test]
#[serial]
fn test_load_json() {
    let path = "unitest_phonebook.conf";
    fs::write(path, r#"{
        "database": "work.db",
        "logger": { "level": "warn", "logFile": "work.log" }
    }"#).unwrap();

    let mut builder = Builder::new();
    let cfg = builder.load(path).expect("load").build().expect("config");
    assert_eq!(cfg.database_path(), "work.db");
    assert_eq!(cfg.log_level(), LevelFilter::Warn);
    assert_eq!(cfg.log_file(), Some("work.log"));

    // Command-line values win over the file.
    let cfg = Builder::new()
        .load(path).expect("load")
        .with_database("other.db")
        .build()
        .expect("config");
    assert_eq!(cfg.database_path(), "other.db");

    _ = fs::remove_file(path);
}

#[test]
#[serial]
fn test_load_partial_json() {
    let path = "unitest_partial.conf";
    fs::write(path, r#"{ "logger": { "level": "nonsense" } }"#).unwrap();

    let mut builder = Builder::new();
    let cfg = builder.load(path).expect("load").build().expect("config");
    assert_eq!(cfg.database_path(), DEFAULT_DATABASE);
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file(), None);

    _ = fs::remove_file(path);
}

#[test]
#[serial]
fn test_load_errors() {
    let mut builder = Builder::new();
    assert!(matches!(builder.load("no-such-file.conf"), Err(Error::Io(_))));

    let path = "unitest_broken.conf";
    fs::write(path, "{ database: ").unwrap();
    assert!(matches!(Builder::new().load(path), Err(Error::Argument(_))));
    _ = fs::remove_file(path);
}
