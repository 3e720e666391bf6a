//! Engine operation tests.

use catiq_core::{
    analysis::{DamageSeverity, Sentiment},
    clock::FixedClock,
    config::PipelineConfig,
    engine::PipelineEngine,
};
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 16, 45, 0).unwrap()
}

fn build_engine() -> PipelineEngine {
    let config = PipelineConfig::default_test();
    let seed = config.seed.unwrap_or_default();
    PipelineEngine::new(config, seed, Arc::new(FixedClock::new(now())))
}

#[test]
fn claims_without_count_draw_thirty_to_eighty() {
    let engine = build_engine();
    for _ in 0..100 {
        let view = engine.claims_for_event("EVT-9", None).unwrap();
        assert!((30..=80).contains(&view.totals.total_claims), "{}", view.totals.total_claims);
        assert_eq!(view.claims.len(), 20);
        assert_eq!(
            view.totals.auto_approved + view.totals.pending_review,
            view.totals.total_claims
        );
    }
}

#[test]
fn explicit_claim_count_is_honoured() {
    let engine = build_engine();
    assert_eq!(engine.claims_for_event("EVT-9", Some(0)).unwrap().totals.total_claims, 0);
    assert_eq!(engine.claims_for_event("EVT-9", Some(5)).unwrap().claims.len(), 5);
    assert!(engine.claims_for_event("EVT-9", Some(-3)).unwrap_err().is_invalid_argument());
}

#[test]
fn oversized_claim_count_is_rejected_without_generating() {
    let engine = build_engine();
    let max = i64::from(engine.config.max_claims);

    assert_eq!(engine.claims_for_event("EVT-9", Some(max)).unwrap().totals.total_claims, 10_000);

    for n in [max + 1, 100_000_000_000, i64::MAX] {
        let err = engine.claims_for_event("EVT-9", Some(n)).unwrap_err();
        assert!(err.is_invalid_argument(), "count {n}: {err}");
        assert!(err.to_string().contains("count"));
    }
    assert_eq!(engine.calls_served(), 1, "rejected requests must not consume calls");
}

#[test]
fn simulation_respects_configured_ranges() {
    let engine = build_engine();
    for _ in 0..100 {
        let sim = engine.simulate_new_disaster().unwrap();
        assert!((40..=70).contains(&sim.claims_generated));
        assert!(sim.auto_approved <= sim.claims_generated);
        assert!((10..=20).contains(&sim.demos_sent));
        assert!((2..=5).contains(&sim.trials_activated));
        assert_eq!(sim.estimated_revenue, u64::from(sim.trials_activated) * 1200);
        assert!(sim.disaster.event_id.starts_with("NWS-"));
    }
}

#[test]
fn active_disasters_returns_two_or_three() {
    let engine = build_engine();
    for _ in 0..100 {
        let n = engine.active_disasters().len();
        assert!(n == 2 || n == 3, "got {n}");
    }
}

#[test]
fn analysis_echoes_event_and_stays_in_range() {
    let engine = build_engine();
    for _ in 0..1_000 {
        let a = engine.disaster_analysis("NWS-TORNADO-202610191645");
        assert_eq!(a.event_id, "NWS-TORNADO-202610191645");

        let sat = &a.satellite_analysis;
        assert!((50..=200).contains(&sat.area_affected_sqkm));
        assert!((200..=1500).contains(&sat.building_damage_count));
        assert!((5_000_000..=50_000_000).contains(&sat.estimated_loss));
        assert!((0.85..=0.98).contains(&sat.confidence_score));
        assert!(matches!(
            sat.damage_severity,
            DamageSeverity::Moderate | DamageSeverity::Severe | DamageSeverity::Catastrophic
        ));

        let social = &a.social_signals;
        assert!((50..=300).contains(&social.total_posts));
        assert!((25..=150).contains(&social.damage_keywords));
        assert!((10..=80).contains(&social.geo_tagged_reports));
        assert_eq!(social.sentiment_analysis, Sentiment::UrgentAssistanceNeeded);
    }
}

#[test]
fn agent_status_is_fixed_presentation_data() {
    let engine = build_engine();
    let report = engine.agent_status();
    assert_eq!(report.geo_sentinel.last_scan, now() - Duration::minutes(2));
    assert_eq!(report.claims_verifier.claims_processed, 127);
    assert_eq!(report.revenue_engine.revenue_72h, 8200.0);
    assert_eq!(report.revenue_engine.conversion_rate, "23.5%");

    let json = serde_json::to_value(engine.health()).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(build_engine());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                for _ in 0..25 {
                    engine.claims_for_event("EVT-1", Some(3)).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(engine.calls_served(), 100);
}
