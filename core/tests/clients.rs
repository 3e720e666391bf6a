//! Client roster generation tests.

use catiq_core::{
    catalog::COMPANIES,
    client::{ClientGenerator, ClientStatus, RosterTotals},
    rng::SeededRng,
};
use chrono::{Duration, TimeZone, Utc};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

#[test]
fn roster_always_has_five_clients_in_order() {
    let mut rng = SeededRng::new(10);
    for _ in 0..100 {
        let clients = ClientGenerator::generate(&mut rng, fixed_now());
        assert_eq!(clients.len(), 5);
        for (client, company) in clients.iter().zip(COMPANIES.iter()) {
            assert_eq!(client.company_name, company.name);
            assert_eq!(client.email, company.email);
            assert_eq!(client.status, company.status, "status must come from the roster");
        }
    }
}

#[test]
fn status_dependent_fields_are_zero_elsewhere() {
    let mut rng = SeededRng::new(20);
    for _ in 0..1_000 {
        for c in ClientGenerator::generate(&mut rng, fixed_now()) {
            if c.status != ClientStatus::TrialActive {
                assert_eq!(c.trial_events, 0, "{c:?}");
            } else {
                assert!((0..=5).contains(&c.trial_events));
            }
            if c.status != ClientStatus::PayingClient {
                assert_eq!(c.revenue_generated, 0.0, "{c:?}");
            } else {
                assert!((1_000.0..=25_000.0).contains(&c.revenue_generated));
            }
        }
    }
}

#[test]
fn signup_is_backdated_one_to_thirty_days() {
    let mut rng = SeededRng::new(30);
    let now = fixed_now();
    for _ in 0..500 {
        for c in ClientGenerator::generate(&mut rng, now) {
            let age = now - c.signup_timestamp;
            assert!(age >= Duration::days(1) && age <= Duration::days(30), "age {age}");
            assert!(c.client_id.starts_with("CLI-"));
        }
    }
}

#[test]
fn roster_totals_count_by_status() {
    let mut rng = SeededRng::new(40);
    let clients = ClientGenerator::generate(&mut rng, fixed_now());
    let totals = RosterTotals::from_clients(&clients);

    assert_eq!(totals.total_clients, 5);
    assert_eq!(totals.active_trials, 2);
    assert_eq!(totals.paying_clients, 2);
    let paying: f64 = clients.iter().map(|c| c.revenue_generated).sum();
    assert!((totals.total_revenue - paying).abs() < 1e-6);
    assert!(totals.total_revenue >= 2_000.0);
}

#[test]
fn status_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&ClientStatus::TrialActive).unwrap(),
        "\"trial_active\""
    );
    assert_eq!(ClientStatus::PayingClient.as_str(), "paying_client");
    assert_eq!(ClientStatus::DemoSent.as_str(), "demo_sent");
}
