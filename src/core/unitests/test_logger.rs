use std::fs;
use log::{info, debug, error};
use serial_test::serial;

use crate::core::logger;

#[test]
#[serial]
fn test_logger_writes_file() {
    let path = "unitest_logger.log";
    _ = fs::remove_file(path);

    logger::setup(log::LevelFilter::Info, Some(path)).expect("logger");
    info!("info: testing....");
    debug!("debug: hidden");
    error!("error: testing...");
    logger::teardown();

    let text = fs::read_to_string(path).unwrap();
    assert!(text.contains("[INFO] info: testing...."));
    assert!(text.contains("[ERROR] error: testing..."));
    assert!(!text.contains("hidden"));

    _ = fs::remove_file(path);
}

#[test]
#[serial]
fn test_logger_disabled() {
    logger::setup(log::LevelFilter::Info, None).expect("logger");
    info!("info: nowhere");
    assert_eq!(log::max_level(), log::LevelFilter::Off);
    logger::teardown();
}
