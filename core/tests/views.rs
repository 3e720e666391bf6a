//! Boundary view aggregation tests.

use catiq_core::{
    claim::ClaimRecord,
    client::ClientGenerator,
    event::EventGenerator,
    rng::SeededRng,
    view::{ClaimsByEventView, RevenueDashboardView, SimulationView},
};
use chrono::{TimeZone, Utc};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 0).unwrap()
}

/// Batch of `total` claims worth 1000.0 each, the first `approved` of
/// which pass the rule.
fn batch(total: usize, approved: usize) -> Vec<ClaimRecord> {
    (0..total)
        .map(|i| {
            let (social, satellite) = if i < approved { (10, 90) } else { (1, 40) };
            ClaimRecord::verified(
                format!("CLM-{i:08x}"),
                "EVT-1".to_string(),
                "9101 Main St, Houston, TX 77002".to_string(),
                1_000.0,
                social,
                satellite,
                fixed_now(),
            )
        })
        .collect()
}

#[test]
fn totals_ignore_display_truncation() {
    // Put the approvals at the END so truncation would drop them all.
    let mut claims = batch(50, 12);
    claims.reverse();

    let view = ClaimsByEventView::from_claims("EVT-1", claims, 20);

    assert_eq!(view.totals.total_claims, 50);
    assert_eq!(view.totals.auto_approved, 12);
    assert_eq!(view.totals.pending_review, 38);
    assert_eq!(view.totals.total_value, 50_000.0);
    assert_eq!(view.claims.len(), 20);
    assert!(view.claims.iter().all(|c| !c.auto_approved));
}

#[test]
fn small_batch_is_not_padded() {
    let view = ClaimsByEventView::from_claims("EVT-1", batch(7, 3), 20);
    assert_eq!(view.claims.len(), 7);
    assert_eq!(view.totals.auto_approved, 3);
}

#[test]
fn claims_view_serializes_flat() {
    let view = ClaimsByEventView::from_claims("EVT-1", batch(50, 12), 20);
    let json = serde_json::to_value(view).unwrap();
    assert_eq!(json["event_id"], "EVT-1");
    assert_eq!(json["total_claims"], 50);
    assert_eq!(json["auto_approved"], 12);
    assert_eq!(json["pending_review"], 38);
    assert_eq!(json["total_value"], 50_000.0);
    assert_eq!(json["claims"].as_array().unwrap().len(), 20);
    assert!(json.get("totals").is_none());
}

#[test]
fn revenue_dashboard_keeps_presentation_constants() {
    let mut rng = SeededRng::new(3);
    let view = RevenueDashboardView::from_clients(ClientGenerator::generate(&mut rng, fixed_now()));
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["revenue_72h"], 8200.0);
    assert_eq!(json["conversion_rate"], 23.5);
    assert_eq!(json["total_clients"], 5);
    assert_eq!(json["active_trials"], 2);
    assert_eq!(json["paying_clients"], 2);
    assert_eq!(json["clients"].as_array().unwrap().len(), 5);
}

#[test]
fn simulation_revenue_is_twelve_hundred_per_trial() {
    let mut rng = SeededRng::new(4);
    let disaster = EventGenerator::generate(&mut rng, fixed_now());
    let view = SimulationView::new(disaster, &batch(45, 9), 14, 3, 1200);

    assert_eq!(view.claims_generated, 45);
    assert_eq!(view.auto_approved, 9);
    assert_eq!(view.estimated_revenue, 3_600);
}
