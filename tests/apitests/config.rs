use std::fs;
use log::LevelFilter;
use serial_test::serial;

use phonebook::configuration as cfg;

use crate::{
    working_path,
    remove_working_path,
};

#[test]
fn test_default_config() {
    let cfg = cfg::Builder::new().build().unwrap();
    assert_eq!(cfg.database_path(), cfg::DEFAULT_DATABASE);
    assert_eq!(cfg.log_level(), LevelFilter::Info);
}

#[test]
#[serial]
fn test_sample_config() {
    let dir = "apitests_config";
    let path = format!("{}/phonebook.conf", working_path(dir));
    fs::copy(concat!(env!("CARGO_MANIFEST_DIR"), "/phonebook.conf"), &path).unwrap();

    let cfg = cfg::Builder::new()
        .load(&path)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(cfg.database_path(), "phonebook.db");
    assert_eq!(cfg.log_file(), Some("phonebook.log"));

    remove_working_path(dir);
}
