use std::collections::HashMap;

use pretty_assertions::assert_eq;
use timetable_api::config::ApiConfig;
use timetable_core::generator::GeneratorSettings;
use timetable_core::time_label::SlotClock;
use tracing::Level;

fn config_with(vars: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_with(&[]).expect("defaults should load");

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.seed, None);
    assert_eq!(config.generator, GeneratorSettings::default());
    assert_eq!(config.clock, SlotClock::default());
}

#[test]
fn test_overrides() {
    let config = config_with(&[
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "debug"),
        ("API_CORS_ORIGINS", "http://a.test, http://b.test"),
        ("TIMETABLE_SEED", "42"),
        ("TIMETABLE_LUNCH_AFTER_SLOT", "2"),
        ("TIMETABLE_DAY_START", "9:15"),
        ("TIMETABLE_SLOT_MINUTES", "45"),
    ])
    .expect("overrides should load");

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
    );
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.generator.lunch_after_slot, 2);
    assert_eq!(config.clock.label(0), "9:15 AM - 10:00 AM");
}

#[test]
fn test_slot_minutes_without_start() {
    let config = config_with(&[("TIMETABLE_SLOT_MINUTES", "40")]).expect("should load");
    assert_eq!(config.clock.label(0), "8:50 AM - 9:30 AM");
}

#[test]
fn test_invalid_values_are_errors() {
    assert!(config_with(&[("API_PORT", "http")]).is_err());
    assert!(config_with(&[("TIMETABLE_SEED", "lucky")]).is_err());
    assert!(config_with(&[("TIMETABLE_LUNCH_AFTER_SLOT", "-1")]).is_err());
    assert!(config_with(&[("TIMETABLE_DAY_START", "noon")]).is_err());
    assert!(config_with(&[("TIMETABLE_SLOT_MINUTES", "0")]).is_err());
}
