// tests/config_env.rs
//
// Env overrides for ServiceConfig. Serialized because the process env is shared.

use std::fs;

use article_quality_analyzer::config::{
    ServiceConfig, DEFAULT_MAX_TEXT_CHARS, ENV_CONFIG_PATH, ENV_DEBUG_ROUTES, ENV_DEV_LOG,
    ENV_MAX_TEXT_CHARS,
};
use serial_test::serial;

fn clear_env() {
    for k in [ENV_CONFIG_PATH, ENV_MAX_TEXT_CHARS, ENV_DEV_LOG, ENV_DEBUG_ROUTES] {
        std::env::remove_var(k);
    }
}

/// Unique file in std::env::temp_dir().
fn tmp_config(contents: &str) -> std::path::PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("analyzer_cfg_{nanos}.toml"));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn missing_file_gives_defaults() {
    clear_env();
    std::env::set_var(ENV_CONFIG_PATH, "no/such/service.toml");
    let cfg = ServiceConfig::from_env().unwrap();
    assert_eq!(cfg.max_text_chars, DEFAULT_MAX_TEXT_CHARS);
    assert!(!cfg.dev_log);
    clear_env();
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let path = tmp_config("[service]\nmax_text_chars = 1000\ndebug_routes = true\n");
    std::env::set_var(ENV_CONFIG_PATH, &path);
    std::env::set_var(ENV_MAX_TEXT_CHARS, "42");
    std::env::set_var(ENV_DEV_LOG, "1");
    std::env::set_var(ENV_DEBUG_ROUTES, "false");

    let cfg = ServiceConfig::from_env().unwrap();
    assert_eq!(cfg.max_text_chars, 42);
    assert!(cfg.dev_log);
    assert!(!cfg.debug_routes);

    let _ = fs::remove_file(&path);
    clear_env();
}

#[test]
#[serial]
fn garbage_env_values_are_ignored() {
    clear_env();
    let path = tmp_config("[service]\nmax_text_chars = 1000\n");
    std::env::set_var(ENV_CONFIG_PATH, &path);
    std::env::set_var(ENV_MAX_TEXT_CHARS, "lots");
    std::env::set_var(ENV_DEV_LOG, "maybe");

    let cfg = ServiceConfig::from_env().unwrap();
    assert_eq!(cfg.max_text_chars, 1000);
    assert!(!cfg.dev_log);

    let _ = fs::remove_file(&path);
    clear_env();
}

#[test]
#[serial]
fn invalid_toml_is_reported() {
    clear_env();
    let path = tmp_config("[service\n");
    std::env::set_var(ENV_CONFIG_PATH, &path);
    let err = ServiceConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("invalid config"));
    let _ = fs::remove_file(&path);
    clear_env();
}
