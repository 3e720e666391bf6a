//! Client roster generation.
//!
//! Unlike events and claims, the categorical field here (status) is NOT
//! drawn: it comes from the fixed roster. Only the status-dependent
//! numbers are random, and each is zero outside its own status.

use crate::{
    catalog::{CompanyProfile, COMPANIES},
    rng::{hex_id, EntropySource},
    types::{round2, ClientId},
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const TRIAL_EVENTS: RangeInclusive<i64> = 0..=5;
pub const REVENUE: (f64, f64) = (1_000.0, 25_000.0);
pub const SIGNUP_OFFSET_DAYS: RangeInclusive<i64> = 1..=30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    TrialActive,
    PayingClient,
    DemoSent,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrialActive => "trial_active",
            Self::PayingClient => "paying_client",
            Self::DemoSent => "demo_sent",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientRecord {
    pub client_id: ClientId,
    pub company_name: String,
    pub email: String,
    pub status: ClientStatus,
    pub trial_events: i64,
    pub revenue_generated: f64,
    pub signup_timestamp: DateTime<Utc>,
}

pub struct ClientGenerator;

impl ClientGenerator {
    /// Regenerate the whole roster. Length always equals the roster size.
    pub fn generate<R: EntropySource>(rng: &mut R, now: DateTime<Utc>) -> Vec<ClientRecord> {
        COMPANIES
            .iter()
            .map(|company| Self::generate_one(rng, now, company))
            .collect()
    }

    fn generate_one<R: EntropySource>(
        rng: &mut R,
        now: DateTime<Utc>,
        company: &CompanyProfile,
    ) -> ClientRecord {
        let client_id = hex_id(rng, "CLI");
        let trial_events = match company.status {
            ClientStatus::TrialActive => rng.int_range(TRIAL_EVENTS),
            _ => 0,
        };
        let revenue_generated = match company.status {
            ClientStatus::PayingClient => round2(rng.uniform(REVENUE.0, REVENUE.1)),
            _ => 0.0,
        };
        let signup_days = rng.int_range(SIGNUP_OFFSET_DAYS);

        ClientRecord {
            client_id,
            company_name: company.name.to_string(),
            email: company.email.to_string(),
            status: company.status,
            trial_events,
            revenue_generated,
            signup_timestamp: now - Duration::days(signup_days),
        }
    }
}

/// Roster aggregates for the revenue dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RosterTotals {
    pub total_clients: usize,
    pub active_trials: usize,
    pub paying_clients: usize,
    pub total_revenue: f64,
}

impl RosterTotals {
    pub fn from_clients(clients: &[ClientRecord]) -> Self {
        let with_status = |s: ClientStatus| clients.iter().filter(|c| c.status == s).count();
        Self {
            total_clients: clients.len(),
            active_trials: with_status(ClientStatus::TrialActive),
            paying_clients: with_status(ClientStatus::PayingClient),
            total_revenue: clients.iter().map(|c| c.revenue_generated).sum(),
        }
    }
}
