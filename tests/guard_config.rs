//! Tests for the JSON configuration layer: defaults, clamping, and the two
//! failure modes.

use std::path::Path;

use approx::assert_relative_eq;
use rstest::rstest;
use skulk::{ConfigError, GuardConfig};

#[test]
fn defaults_match_the_prototype() {
    let config = GuardConfig::default();
    assert_relative_eq!(config.radius, 3.5);
    assert_eq!(config.player_tag, "Player");
    assert_relative_eq!(config.inner_radius_factor, 0.6);
    assert_relative_eq!(config.outer_angle, 90.0);
    assert_relative_eq!(config.inner_angle, 60.0);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = GuardConfig::from_json_str(r#"{"radius": 5.0}"#).expect("valid json");
    assert_relative_eq!(config.radius, 5.0);
    assert_eq!(config.player_tag, "Player");
    assert_relative_eq!(config.inner_angle, 60.0);
}

#[rstest]
#[case(r#"{"radius": 0.0}"#, 0.01)]
#[case(r#"{"radius": -2.0}"#, 0.01)]
#[case(r#"{"radius": 4.25}"#, 4.25)]
fn to_guard_clamps_the_radius(#[case] json: &str, #[case] stored: f32) {
    let guard = GuardConfig::from_json_str(json)
        .expect("valid json")
        .to_guard();
    assert_relative_eq!(guard.radius(), stored);
}

#[test]
fn to_guard_keeps_angles_in_range() {
    let guard = GuardConfig::from_json_str(r#"{"outer_angle": 400.0, "inner_angle": -10.0}"#)
        .expect("valid json")
        .to_guard();
    assert_relative_eq!(guard.outer_angle, 360.0);
    assert_relative_eq!(guard.inner_angle, 0.0);
    assert_relative_eq!(guard.applied_inner_angle(), 0.0);
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = GuardConfig::from_json_str("not json").expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn unknown_fields_are_rejected() {
    let err = GuardConfig::from_json_str(r#"{"radis": 1.0}"#).expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GuardConfig::load(Path::new("/nonexistent/guard.json")).expect_err("must fail");
    assert!(matches!(err, ConfigError::Io { .. }), "got {err:?}");
}
