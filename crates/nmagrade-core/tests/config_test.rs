//! Tests for the nmagrade configuration system.

use std::sync::Mutex;

use nmagrade_core::config::{CliOverrides, NmaConfig};
use nmagrade_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all NMAGRADE_ env vars and point HOME at an empty directory so a
/// developer's own user config cannot leak into the tests.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "NMAGRADE_VALIDATION_WARN_SINGLE_ARM",
        "NMAGRADE_RECOMMENDATION_FEW_STUDIES_THRESHOLD",
        "NMAGRADE_RECOMMENDATION_DISCONNECTED_PENALTY",
        "NMAGRADE_GRADE_BRIDGE_COUNT",
        "NMAGRADE_GRADE_DEFAULT_CERTAINTY_LEVEL",
        "NMAGRADE_PIPELINE_BLOCK_ON_INVALID",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
}

#[test]
fn test_defaults_without_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    let config = NmaConfig::load(project.path(), None).unwrap();

    assert_eq!(config.grade.effective_bridge_count(), 2);
    assert_eq!(config.grade.effective_default_certainty_level(), 2);
    assert!(config.pipeline.effective_block_on_invalid());
    assert_eq!(config.recommendation.effective_few_studies_threshold(), 5);
    assert_eq!(config.recommendation.effective_event_rate_band(), (0.10, 0.90));
    assert!((config.recommendation.effective_disconnected_penalty() - 0.7).abs() < 1e-12);
}

#[test]
fn test_four_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".nmagrade")).unwrap();
    std::fs::write(
        home.path().join(".nmagrade").join("config.toml"),
        r#"
[grade]
bridge_count = 4
default_certainty_level = 1

[recommendation]
zero_event_threshold = 0.3
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("nmagrade.toml"),
        r#"
[grade]
bridge_count = 3

[pipeline]
block_on_invalid = false
"#,
    )
    .unwrap();

    std::env::set_var("NMAGRADE_PIPELINE_BLOCK_ON_INVALID", "true");

    let cli = CliOverrides {
        default_certainty_level: Some(3),
        ..Default::default()
    };
    let config = NmaConfig::load(project.path(), Some(&cli)).unwrap();

    // project beats user
    assert_eq!(config.grade.bridge_count, Some(3));
    // env beats project
    assert_eq!(config.pipeline.block_on_invalid, Some(true));
    // cli beats user
    assert_eq!(config.grade.default_certainty_level, Some(3));
    // untouched user value survives
    assert_eq!(config.recommendation.zero_event_threshold, Some(0.3));

    std::env::remove_var("NMAGRADE_PIPELINE_BLOCK_ON_INVALID");
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(project.path().join("nmagrade.toml"), "[grade\nbridge_count = ").unwrap();

    let err = NmaConfig::load(project.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_out_of_range_values() {
    let err = NmaConfig::from_toml("[recommendation]\ndisconnected_penalty = 1.5\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "recommendation.disconnected_penalty"
    ));

    let err = NmaConfig::from_toml("[grade]\ndefault_certainty_level = 5\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let err = NmaConfig::from_toml("[grade]\nbridge_count = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let err = NmaConfig::from_toml(
        "[recommendation]\nevent_rate_lower = 0.8\nevent_rate_upper = 0.2\n",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_logging_section() {
    let config = NmaConfig::from_toml(
        "[logging]\nfilter = \"nmagrade_analysis::grade=debug\"\nsource_location = false\n",
    )
    .unwrap();
    assert_eq!(config.logging.effective_filter(), "nmagrade_analysis::grade=debug");
    assert!(!config.logging.effective_source_location());

    let defaults = NmaConfig::default();
    assert_eq!(defaults.logging.effective_filter(), "nmagrade=info");
    assert!(defaults.logging.effective_source_location());

    let err = NmaConfig::from_toml("[logging]\nfilter = \"nmagrade=loudest\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "logging.filter"));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = NmaConfig::from_toml("[grade]\nbridge_count = 2\nshiny_new_key = true\n").unwrap();
    assert_eq!(config.grade.bridge_count, Some(2));
}

#[test]
fn test_toml_roundtrip_preserves_values() {
    let mut config = NmaConfig::default();
    config.recommendation.few_studies_threshold = Some(6);
    config.grade.bridge_count = Some(3);

    let text = config.to_toml().unwrap();
    let parsed = NmaConfig::from_toml(&text).unwrap();

    assert_eq!(parsed.recommendation.few_studies_threshold, Some(6));
    assert_eq!(parsed.grade.bridge_count, Some(3));
    assert_eq!(parsed.pipeline.block_on_invalid, None);
}
