//! Config Validation Tests
//!
//! Typo detection, range validation and load behaviour of `DriftConfig`,
//! exercised independently from the drift engine.

use drift_monitor::config::validation::{
    known_config_keys, suggest_correction, validate_ranges, validate_unknown_keys,
};
use drift_monitor::config::{CategoricalPolicy, ConfigError, DriftConfig, KsMode};

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_threshold_warns_with_suggestion() {
    let toml_str = r#"
[alerting]
treshold = 0.4
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("treshold"));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("alerting.threshold"));
    assert!(warnings[0].to_string().contains("did you mean 'alerting.threshold'"));
}

#[test]
fn typo_in_section_name_warns_for_section_and_child() {
    let toml_str = r#"
[alertng]
threshold = 0.4
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("alerting"));
    assert_eq!(warnings[1].suggestion.as_deref(), Some("alerting.threshold"));
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[alerting]
threshold = 0.25

[detection]
significance_level = 0.01
ks_mode = "exact"
categorical_policy = "skip"

[columns]
excluded = ["Churn", "customerID"]
"#;
    assert!(validate_unknown_keys(toml_str).is_empty());

    let config = DriftConfig::from_toml_str(toml_str).expect("valid config should load");
    assert_eq!(config.alerting.threshold, 0.25);
    assert_eq!(config.detection.significance_level, 0.01);
    assert_eq!(config.detection.ks_mode, KsMode::Exact);
    assert_eq!(config.detection.categorical_policy, CategoricalPolicy::Skip);
    assert_eq!(config.columns.excluded, vec!["Churn", "customerID"]);
}

#[test]
fn unknown_keys_do_not_fail_loading() {
    let toml_str = r#"
[alerting]
threshold = 0.2
sns_topic = "arn:aws:sns:eu-west-1:000000000000:drift"
"#;
    let config = DriftConfig::from_toml_str(toml_str).expect("unknown keys only warn");
    assert_eq!(config.alerting.threshold, 0.2);
}

#[test]
fn every_known_key_is_its_own_suggestion() {
    let known = known_config_keys();
    for key in &known {
        assert_eq!(suggest_correction(key, &known).as_deref(), Some(*key));
    }
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn threshold_bounds_are_inclusive() {
    for threshold in [0.0, 1.0] {
        let (errors, _) = validate_ranges(&DriftConfig::default().with_threshold(threshold));
        assert!(errors.is_empty(), "threshold {threshold} should be valid");
    }
    for threshold in [-0.01, 1.01, f64::INFINITY] {
        let (errors, _) = validate_ranges(&DriftConfig::default().with_threshold(threshold));
        assert_eq!(errors.len(), 1, "threshold {threshold} should be rejected");
    }
}

#[test]
fn significance_bounds_are_exclusive() {
    for alpha in [0.0, 1.0, -0.5, f64::NAN] {
        let (errors, _) = validate_ranges(&DriftConfig::default().with_significance_level(alpha));
        assert_eq!(errors.len(), 1, "significance {alpha} should be rejected");
    }
}

#[test]
fn zero_threshold_only_warns() {
    let (errors, warnings) = validate_ranges(&DriftConfig::default().with_threshold(0.0));
    assert!(errors.is_empty());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "alerting.threshold");
}

#[test]
fn validation_error_lists_every_problem() {
    let toml_str = r#"
[alerting]
threshold = 2.0

[detection]
significance_level = 1.5
"#;
    match DriftConfig::from_toml_str(toml_str) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 2);
            assert!(errors[0].contains("alerting.threshold"));
            assert!(errors[1].contains("detection.significance_level"));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn bad_enum_value_is_parse_error() {
    let toml_str = r#"
[detection]
ks_mode = "bootstrap"
"#;
    assert!(matches!(
        DriftConfig::from_toml_str(toml_str),
        Err(ConfigError::Parse(_, _))
    ));
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn load_from_file_reads_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drift_config.toml");
    std::fs::write(&path, "[alerting]\nthreshold = 0.1\n").unwrap();

    let config = DriftConfig::load_from_file(&path).unwrap();
    assert_eq!(config.alerting.threshold, 0.1);
    assert_eq!(config.detection, DriftConfig::default().detection);
}

#[test]
fn load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = DriftConfig::load_from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_, _))));
}
