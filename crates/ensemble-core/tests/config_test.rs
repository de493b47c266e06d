//! Tests for settings parsing, validation, and per-parameter overrides.

use std::io::Write;

use ensemble_core::config::{ContinuousMethod, WmoAlgorithm};
use ensemble_core::errors::ConfigError;
use ensemble_core::{ConsensusSettings, Parameter};

#[test]
fn empty_toml_yields_defaults() {
    let settings = ConsensusSettings::from_toml_str("").unwrap();
    assert_eq!(settings, ConsensusSettings::default());
}

#[test]
fn toml_sections_and_overrides() {
    let text = r#"
        [wmo]
        algorithm = "severityGroups"
        dynamic_threshold_base = 90.0

        [[wmo.severity_groups]]
        codes = [0, 1, 2, 3]
        severity = 0
        description = "dry"

        [[wmo.severity_groups]]
        codes = [61, 63, 65]
        severity = 3
        description = "rain"

        [precip]
        wet_threshold_mm = 0.2
        sigma_ratio = 0.3

        [continuous]
        method = "robust_trimmed_mean"

        [parameters.temperature_2m.continuous]
        method = "adaptive_gaussian"
        sigma_multiplier = 0.5
    "#;
    let settings = ConsensusSettings::from_toml_str(text).unwrap();

    assert_eq!(settings.wmo.algorithm, WmoAlgorithm::SeverityGroups);
    assert_eq!(settings.wmo.severity_groups.len(), 2);
    assert_eq!(settings.wmo.dynamic_threshold_base, 90.0);
    assert_eq!(settings.precip.wet_threshold_mm, 0.2);
    // Untouched fields keep their defaults.
    assert!(settings.precip.use_log_transform);

    let temp = settings.continuous_for(Parameter::Temperature2m);
    assert_eq!(temp.method, ContinuousMethod::AdaptiveGaussian);
    assert_eq!(temp.sigma_multiplier, 0.5);

    let humidity = settings.continuous_for(Parameter::RelativeHumidity2m);
    assert_eq!(humidity.method, ContinuousMethod::RobustTrimmedMean);
}

#[test]
fn json_uses_legacy_field_names() {
    let text = r#"{
        "wmo": {
            "algorithm": "smart_barycentre_11_groups",
            "dynamicThresholdBase": 70,
            "bary_max_pond": 3
        },
        "wind": { "sigmaDeg": 45 }
    }"#;
    let settings = ConsensusSettings::from_json_str(text).unwrap();
    assert_eq!(settings.wmo.algorithm, WmoAlgorithm::SmartBary);
    assert_eq!(settings.wmo.dynamic_threshold_base, 70.0);
    assert_eq!(settings.wmo.bary_max_pond, 3.0);
    assert_eq!(settings.wind.sigma_deg, 45.0);
}

#[test]
fn unknown_algorithm_fails_at_load() {
    let err = ConsensusSettings::from_toml_str("[wmo]\nalgorithm = \"dice\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn invalid_values_fail_validation() {
    let err = ConsensusSettings::from_toml_str("[wind]\nsigma_deg = 0.0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "wind.sigma_deg"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_override_fails_validation() {
    let text = "[parameters.precipitation.precip]\nsigma_ratio = -1.0\n";
    assert!(ConsensusSettings::from_toml_str(text).is_err());
}

#[test]
fn load_dispatches_on_extension() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("settings.json");
    let mut f = std::fs::File::create(&json_path).unwrap();
    write!(f, r#"{{"precip": {{"wet_threshold_mm": 0.1}}}}"#).unwrap();
    let settings = ConsensusSettings::load(&json_path).unwrap();
    assert_eq!(settings.precip.wet_threshold_mm, 0.1);

    let toml_path = dir.path().join("settings.toml");
    std::fs::write(&toml_path, "[wind]\nsigma_deg = 20.0\n").unwrap();
    let settings = ConsensusSettings::load(&toml_path).unwrap();
    assert_eq!(settings.wind.sigma_deg, 20.0);
}

#[test]
fn load_missing_file() {
    let err = ConsensusSettings::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
