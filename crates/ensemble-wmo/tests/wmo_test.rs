use ensemble_core::{ConsensusSettings, SeverityGroup, WmoAlgorithm, WmoConfig};
use ensemble_wmo::tables::{code_of_ordinal, ordinal_of, KNOWN_CODES};
use ensemble_wmo::{aggregate_wmo, RiskKind, Selection};

fn with(algorithm: WmoAlgorithm) -> WmoConfig {
    WmoConfig::with_algorithm(algorithm)
}

// ── Mode ────────────────────────────────────────────────────────────────

#[test]
fn mode_frequency_and_tiebreak() {
    let r = aggregate_wmo(&[95, 95, 99], &with(WmoAlgorithm::Mode));
    assert_eq!((r.code, r.selection), (95, Selection::Dominant));

    let r = aggregate_wmo(&[95, 99], &with(WmoAlgorithm::Mode));
    assert_eq!((r.code, r.selection), (99, Selection::SeverityTiebreak));
}

// ── Severity groups ─────────────────────────────────────────────────────

#[test]
fn severe_group_at_threshold_beats_larger_group() {
    let config = WmoConfig {
        algorithm: WmoAlgorithm::SeverityGroups,
        severity_groups: vec![
            SeverityGroup::new(0, "cloud", &[0, 1, 2, 3]),
            SeverityGroup::new(5, "thunder", &[95, 96, 99]),
        ],
        dynamic_threshold_base: 80.0,
        ..WmoConfig::default()
    };
    // Thunder has 2 of 5 = 0.4; cloud has 3 of 5.
    let r = aggregate_wmo(&[2, 3, 3, 95, 99], &config);
    assert_eq!(r.debug.detail.threshold, Some(0.4));
    assert_eq!(r.selection, Selection::ThresholdGroup);
    assert_eq!(r.debug.detail.selected_group.as_deref(), Some("thunder"));
    // Only lower-severity pressure → minimum code.
    assert_eq!(r.code, 95);
}

// ── Rounding rules ──────────────────────────────────────────────────────

#[test]
fn bary_and_smart_bary_round_half_differently() {
    // Both put equal mass on two adjacent positions.
    let bary = aggregate_wmo(&[0, 1], &with(WmoAlgorithm::Bary));
    assert_eq!(bary.code, 0);
    let smart = aggregate_wmo(&[96, 99], &with(WmoAlgorithm::SmartBary));
    assert_eq!(smart.code, 99);
}

#[test]
fn bary_six_tenths_rounds_up() {
    let r = aggregate_wmo(&[0, 0, 1, 1, 1], &with(WmoAlgorithm::Bary));
    assert_eq!(r.code, 1);
}

// ── Remapped median ─────────────────────────────────────────────────────

#[test]
fn ordinal_map_round_trips() {
    for code in KNOWN_CODES {
        assert_eq!(ordinal_of(code).and_then(code_of_ordinal), Some(code));
    }
}

#[test]
fn remapped_median_legacy_names() {
    for name in ["remappedMedian", "severityMedian", "remapped_median"] {
        let algorithm: WmoAlgorithm = name.parse().unwrap();
        assert_eq!(algorithm, WmoAlgorithm::RemappedMedian);
    }
    let r = aggregate_wmo(&[61, 63, 65], &with(WmoAlgorithm::RemappedMedian));
    assert_eq!((r.code, r.selection), (63, Selection::RemappedMedian));
}

// ── Settings-driven dispatch ────────────────────────────────────────────

#[test]
fn algorithm_selected_from_settings() {
    let settings = ConsensusSettings::from_toml_str(
        r#"
        [wmo]
        algorithm = "maxSeverity"
        "#,
    )
    .unwrap();
    let r = aggregate_wmo(&[0, 0, 0, 61], &settings.wmo);
    assert_eq!((r.code, r.selection), (61, Selection::MaxSeverity));
}

#[test]
fn unknown_algorithm_fails_at_load() {
    let err = ConsensusSettings::from_toml_str(
        r#"
        [wmo]
        algorithm = "weighted_vote"
        "#,
    );
    assert!(err.is_err());
}

// ── Output shape ────────────────────────────────────────────────────────

#[test]
fn serialized_result_shape() {
    let r = aggregate_wmo(&[95, 96, 0], &with(WmoAlgorithm::SmartBary));
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["wmo"], 96);
    assert_eq!(json["selection"], "smart_barycenter");
    assert_eq!(json["risk"]["kind"], "hail");
    assert_eq!(json["risks"]["thunder"], 3);
    assert_eq!(json["debug"]["algorithm"], "smart_bary");
    assert_eq!(json["debug"]["selected_group"], "thunder_hail");
    assert!(json["debug"].get("threshold").is_none());
    assert!(json["debug"].get("unknown_codes").is_none());
}

#[test]
fn unknown_codes_are_reported_not_fatal() {
    for algorithm in WmoAlgorithm::ALL {
        let r = aggregate_wmo(&[42, 0, 0], &with(algorithm));
        assert_eq!(r.debug.unknown_codes, vec![42], "{algorithm}");
    }
    let smart = aggregate_wmo(&[42, 95, 95], &with(WmoAlgorithm::SmartBary));
    assert_eq!(smart.risk.map(|r| r.kind), Some(RiskKind::Thunder));
}

// ── Logging ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn remapped_median_warns_once_per_unknown_code() {
    let logs = CapturedLogs::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .finish();

    let r = tracing::subscriber::with_default(subscriber, || {
        aggregate_wmo(&[5, 5, 5, 5, 3], &with(WmoAlgorithm::RemappedMedian))
    });

    let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert_eq!(text.matches("code not on the ordinal scale").count(), 1);
    assert_eq!(r.debug.unknown_codes, vec![5]);
}
