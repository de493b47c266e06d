use ensemble_core::{ConsensusSettings, Ensemble, PrecipConfig};
use ensemble_precip::aggregate_precip_mm;

fn ensemble() -> Ensemble {
    Ensemble::from_pairs([
        ("icon_d2", Some(0.0)),
        ("arome", Some(1.2)),
        ("arpege", Some(0.8)),
        ("ecmwf", Some(1.0)),
        ("gfs", None),
        ("ukmo", Some(9.0)),
    ])
}

#[test]
fn serialized_shape_uses_public_field_names() {
    let r = aggregate_precip_mm(ensemble().samples(), &PrecipConfig::default(), 6).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    for key in ["mm_agg", "mouillant", "CI", "IQR", "pop", "wet_count", "total_count"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["mouillant"][0]["model"], "arome");
    assert_eq!(json["mouillant"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["total_count"], 5);
}

#[test]
fn outlier_barely_moves_consensus() {
    let r = aggregate_precip_mm(ensemble().samples(), &PrecipConfig::default(), 0).unwrap();
    assert!(r.mm_agg > 0.8 && r.mm_agg < 1.5, "mm_agg = {}", r.mm_agg);
    // wet median (1.0 + 1.2) / 2 = 1.1, band ±0.22: 1.0 and 1.2 agree
    assert_eq!(r.ci, 50.0);
}

#[test]
fn threshold_from_settings() {
    let settings = ConsensusSettings::from_toml_str(
        r#"
        [precip]
        wet_threshold_mm = 1.0
        "#,
    )
    .unwrap();
    let r = aggregate_precip_mm(ensemble().samples(), &settings.precip, 0).unwrap();
    assert_eq!(r.wet_count, 2);
}

#[test]
fn invalid_epsilon_rejected_at_load() {
    let err = ConsensusSettings::from_toml_str(
        r#"
        [precip]
        use_log_transform = true
        epsilon = 0.0
        "#,
    );
    assert!(err.is_err());
}

#[test]
fn negative_amounts_do_not_count_as_members() {
    let samples = Ensemble::from_pairs([
        ("arome", Some(2.0)),
        ("arpege", Some(-0.3)),
        ("ecmwf", Some(0.0)),
        ("gfs", Some(f64::NAN)),
    ]);
    let r = aggregate_precip_mm(samples.samples(), &PrecipConfig::default(), 0).unwrap();
    assert_eq!(r.total_count, 2);
    assert_eq!(r.wet_count, 1);
}
