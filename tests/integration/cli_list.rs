//! Integration tests for listing display setups

use crate::integration::test_utils::{stderr, stdout, FakeDisplay};

const SETUPS: &str = r#"{
    "laptop": [{"output": "eDP-1"}],
    "home": [
        {"output": "eDP-1", "mode": [1920, 1080], "pos": [0, 0]},
        {"output": "HDMI-1", "pos": [1920, 0]}
    ],
    "tv": [{"output": "HDMI-1"}]
}"#;

#[test]
fn test_list_prints_header_and_names_in_file_order() {
    let fake = FakeDisplay::new();
    let profiles = fake.write_profiles(SETUPS);
    let path = profiles.to_str().unwrap();

    let output = fake.run(&["-j", path]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!(
            "The following setups are defined in {}:\nlaptop\nhome\ntv\n",
            path
        )
    );
}

#[test]
fn test_list_never_runs_control_utility() {
    let fake = FakeDisplay::new();
    let profiles = fake.write_profiles(SETUPS);

    let output = fake.run(&["--jsonfile", profiles.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(fake.calls().is_empty(), "calls: {:?}", fake.calls());
}

#[test]
fn test_list_flag_wins_over_setup_name() {
    let fake = FakeDisplay::new();
    let profiles = fake.write_profiles(SETUPS);

    let output = fake.run(&["-l", "-j", profiles.to_str().unwrap(), "home"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("The following setups are defined in"));
    assert!(fake.calls().is_empty());
}

#[test]
fn test_relative_jsonfile_resolves_against_base_dir() {
    let fake = FakeDisplay::new();
    fake.write_profiles(SETUPS);
    fake.write_config(&format!(
        "[tool]\ncommand = '{}'\n\n[profiles]\nbase_dir = '{}'\n",
        fake.tool_path().display(),
        fake.path().display()
    ));

    let output = fake.run(&[]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(stdout(&output)
        .starts_with("The following setups are defined in displaysetups.json:\n"));
}

#[test]
fn test_missing_profile_file_is_reported() {
    let fake = FakeDisplay::new();
    let missing = fake.path().join("nope.json");

    let output = fake.run(&["-j", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Cannot read profile file"));
}

#[test]
fn test_malformed_entry_is_reported_at_load_time() {
    let fake = FakeDisplay::new();
    let profiles = fake.write_profiles(r#"{"home": [{"output": "eDP-1"}, {"pos": [0, 0]}]}"#);

    let output = fake.run(&["-j", profiles.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(5));
    let err = stderr(&output);
    assert!(err.contains("setup 'home' entry 1"), "stderr={}", err);
}

#[test]
fn test_invalid_json_is_reported() {
    let fake = FakeDisplay::new();
    let profiles = fake.write_profiles("{\"home\": [");

    let output = fake.run(&["-j", profiles.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Invalid JSON"));
}
