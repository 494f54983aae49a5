//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use centerfall::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("CF_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("CF_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_seed_override() {
    std::env::set_var("CF_SIMULATION__SEED", "42");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("CF_SIMULATION__SEED");
    assert_eq!(config.simulation.seed, Some(42));
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("CF_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Gravity Simulation");
    assert!(config.window.vsync);
    assert_eq!(config.simulation.seed, None);
    assert!(!config.debug.log_ticks);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = std::env::temp_dir().join(format!("centerfall-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[window]\ntitle = \"Default\"\n\n[debug]\nlog_level = \"warn\"\n",
    )
    .unwrap();
    std::fs::write(dir.join("user.toml"), "[window]\ntitle = \"User\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.window.title, "User");
    assert_eq!(config.debug.log_level, "warn");
    assert!(config.window.vsync);
}
