/*!
 * Tests for application configuration
 */

use std::path::PathBuf;

use trstore::app_config::{Config, LogLevel};

use crate::common::create_temp_dir;

#[test]
fn test_config_saveAndLoad_shouldRoundTrip() {
    let dir = create_temp_dir().expect("Failed to create temp dir");
    let config_path = dir.path().join("conf.json");

    let config = Config {
        database_path: Some(PathBuf::from("/tmp/translations.db")),
        default_store_id: 3,
        log_level: LogLevel::Debug,
    };

    config.save(&config_path).expect("Failed to save config");
    let loaded = Config::from_file(&config_path).expect("Failed to load config");

    assert_eq!(loaded.database_path, config.database_path);
    assert_eq!(loaded.default_store_id, 3);
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

#[test]
fn test_fromFile_withMissingFields_shouldApplyDefaults() {
    let dir = create_temp_dir().expect("Failed to create temp dir");
    let config_path = dir.path().join("conf.json");
    std::fs::write(&config_path, "{}").unwrap();

    let config = Config::from_file(&config_path).expect("Failed to load config");

    assert!(config.database_path.is_none());
    assert_eq!(config.default_store_id, 0);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_fromFile_withInvalidStoreId_shouldFail() {
    let dir = create_temp_dir().expect("Failed to create temp dir");
    let config_path = dir.path().join("conf.json");
    std::fs::write(&config_path, r#"{"default_store_id": -2}"#).unwrap();

    assert!(Config::from_file(&config_path).is_err());
}

#[test]
fn test_fromFile_withMalformedJson_shouldFail() {
    let dir = create_temp_dir().expect("Failed to create temp dir");
    let config_path = dir.path().join("conf.json");
    std::fs::write(&config_path, "not json at all").unwrap();

    assert!(Config::from_file(&config_path).is_err());
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapAllLevels() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
