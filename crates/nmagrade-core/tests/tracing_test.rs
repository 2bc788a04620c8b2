//! Tests for the nmagrade tracing setup.

use std::sync::Mutex;

use nmagrade_core::config::LoggingConfig;
use nmagrade_core::tracing::{init_tracing, init_tracing_with, resolve_filter, LOG_ENV_VAR};
use tracing::level_filters::LevelFilter;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_init_with_component_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("NMAGRADE_LOG", "nmagrade_analysis::grade=debug,nmagrade_analysis=info");
    init_tracing();
    std::env::remove_var("NMAGRADE_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("NMAGRADE_LOG", "=this is not a filter=");
    init_tracing();
    std::env::remove_var("NMAGRADE_LOG");
    tracing::info!("still alive");
}

#[test]
fn test_configured_filter_used_without_env() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::remove_var(LOG_ENV_VAR);

    let config = LoggingConfig {
        filter: Some("nmagrade_analysis::grade=debug".into()),
        ..Default::default()
    };
    assert_eq!(resolve_filter(&config).max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(
        resolve_filter(&LoggingConfig::default()).max_level_hint(),
        Some(LevelFilter::INFO)
    );
}

#[test]
fn test_env_overrides_configured_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "nmagrade=warn");
    let config = LoggingConfig {
        filter: Some("nmagrade=trace".into()),
        ..Default::default()
    };
    let hint = resolve_filter(&config).max_level_hint();
    std::env::remove_var(LOG_ENV_VAR);
    assert_eq!(hint, Some(LevelFilter::WARN));
}

#[test]
fn test_unparsable_configured_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::remove_var(LOG_ENV_VAR);
    let config = LoggingConfig {
        filter: Some("nmagrade=loudest".into()),
        source_location: Some(false),
    };
    assert_eq!(resolve_filter(&config).max_level_hint(), Some(LevelFilter::INFO));
    init_tracing_with(&config);
}
