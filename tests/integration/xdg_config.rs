//! Integration tests for the global XDG config file and environment overrides

use crate::integration::test_utils::{stderr, with_xdg_config_home, FakeDisplay};
use disparrange::config::ConfigLoader;
use tempfile::TempDir;

const SETUPS: &str = r#"{"home": [{"output": "eDP-1"}]}"#;

#[test]
fn test_global_config_path_follows_xdg_config_home() {
    let test_dir = TempDir::new().unwrap();
    let config_dir = test_dir.path().join("disparrange");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[tool]\ncommand = '/opt/xrandr'\ntimeout_secs = 4\n",
    )
    .unwrap();

    let (path, config) = with_xdg_config_home(test_dir.path(), || {
        (ConfigLoader::global_config_path(), ConfigLoader::load())
    });

    assert_eq!(path, Some(config_dir.join("config.toml")));
    let config = config.unwrap();
    assert_eq!(config.tool.command, "/opt/xrandr");
    assert_eq!(config.tool.timeout_secs, 4);
    assert_eq!(config.tool.dry_run_flag, "--dryrun");
}

#[test]
fn test_cli_reads_global_config_file() {
    let fake = FakeDisplay::new();
    let profiles = fake.write_profiles(SETUPS);
    fake.write_global_config(&format!(
        "[tool]\ncommand = '{}'\n",
        fake.tool_path().display()
    ));

    let output = fake.run_with_global_config(&["-j", profiles.to_str().unwrap(), "home"], &[]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(fake.calls(), vec!["query", "apply"]);
}

#[test]
fn test_environment_overrides_global_config_file() {
    let fake = FakeDisplay::new();
    let profiles = fake.write_profiles(SETUPS);
    fake.write_global_config("[tool]\ncommand = 'disparrange-test-missing-xrandr'\n");
    let tool = fake.tool_path();

    let output = fake.run_with_global_config(
        &["-j", profiles.to_str().unwrap(), "home"],
        &[("DISPARRANGE_TOOL__COMMAND", tool.to_str().unwrap())],
    );

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(fake.calls(), vec!["query", "apply"]);
}

#[test]
fn test_global_config_file_overrides_defaults() {
    let fake = FakeDisplay::new();
    let profiles = fake.write_profiles(SETUPS);
    fake.write_global_config("[tool]\ncommand = 'disparrange-test-missing-xrandr'\n");

    let output = fake.run_with_global_config(&["-j", profiles.to_str().unwrap(), "home"], &[]);

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("disparrange-test-missing-xrandr"));
    assert!(fake.calls().is_empty());
}

#[test]
fn test_environment_overrides_explicit_config_file() {
    let fake = FakeDisplay::new();
    let profiles = fake.write_profiles(SETUPS);

    let output = fake.run_with_env(
        &["-j", profiles.to_str().unwrap(), "home"],
        &[("DISPARRANGE_TOOL__COMMAND", "disparrange-test-missing-xrandr")],
    );

    assert_eq!(output.status.code(), Some(4));
    assert!(fake.calls().is_empty());
}
