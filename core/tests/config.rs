//! Pipeline configuration tests.

use catiq_core::{
    config::{CountRange, PipelineConfig},
    error::PipelineError,
};

#[test]
fn empty_object_yields_defaults() {
    let config = PipelineConfig::from_json("{}").unwrap();
    assert_eq!(config, PipelineConfig::default());
    assert_eq!(config.claims_display_limit, 20);
    assert_eq!(config.default_claims, CountRange::new(30, 80));
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PipelineConfig::from_json(
        r#"{ "seed": 17, "simulation_claims": { "min": 5, "max": 6 } }"#,
    )
    .unwrap();
    assert_eq!(config.seed, Some(17));
    assert_eq!(config.simulation_claims, CountRange::new(5, 6));
    assert_eq!(config.active_disasters, CountRange::new(2, 3));
}

#[test]
fn claim_ranges_must_fit_under_max_claims() {
    let err = PipelineConfig::from_json(
        r#"{ "max_claims": 50, "default_claims": { "min": 30, "max": 80 } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::Config(ref msg) if msg.contains("max_claims")), "{err}");

    let config = PipelineConfig::from_json(r#"{ "max_claims": 80 }"#).unwrap();
    assert_eq!(config.max_claims, 80);
}

#[test]
fn inverted_range_is_rejected() {
    let err = PipelineConfig::from_json(r#"{ "demos_sent": { "min": 9, "max": 1 } }"#).unwrap_err();
    assert!(matches!(err, PipelineError::Config(ref msg) if msg.contains("demos_sent")), "{err}");
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = PipelineConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, PipelineError::Serialization(_)));
}

#[test]
fn load_reads_file_from_disk() {
    let path = std::env::temp_dir().join(format!("catiq-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "claims_display_limit": 5 }"#).unwrap();

    let config = PipelineConfig::load(&path).unwrap();
    assert_eq!(config.claims_display_limit, 5);

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_reports_path() {
    let err = PipelineConfig::load("/nonexistent/catiq.json").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/catiq.json"));
}
