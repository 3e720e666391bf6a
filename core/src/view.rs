//! Boundary views: the response shapes the dashboard consumes.
//!
//! RULE: Aggregates are computed from the FULL generated batch before
//! any display truncation is applied.

use crate::{
    agents::{CONVERSION_RATE, REVENUE_72H},
    claim::{ClaimRecord, ClaimTotals},
    client::{ClientRecord, RosterTotals},
    event::DisasterEvent,
    types::EventId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimsByEventView {
    pub event_id: EventId,
    #[serde(flatten)]
    pub totals: ClaimTotals,
    /// At most `display_limit` claims, in generation order.
    pub claims: Vec<ClaimRecord>,
}

impl ClaimsByEventView {
    pub fn from_claims(event_id: &str, mut claims: Vec<ClaimRecord>, display_limit: usize) -> Self {
        let totals = ClaimTotals::from_claims(&claims);
        claims.truncate(display_limit);
        Self {
            event_id: event_id.to_string(),
            totals,
            claims,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueDashboardView {
    #[serde(flatten)]
    pub totals: RosterTotals,
    pub revenue_72h: f64,
    pub conversion_rate: f64,
    pub clients: Vec<ClientRecord>,
}

impl RevenueDashboardView {
    pub fn from_clients(clients: Vec<ClientRecord>) -> Self {
        Self {
            totals: RosterTotals::from_clients(&clients),
            revenue_72h: REVENUE_72H,
            conversion_rate: CONVERSION_RATE,
            clients,
        }
    }
}

/// Outcome of one simulated detect → verify → sell pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationView {
    pub disaster: DisasterEvent,
    pub claims_generated: usize,
    pub auto_approved: usize,
    pub demos_sent: u32,
    pub trials_activated: u32,
    pub estimated_revenue: u64,
}

impl SimulationView {
    pub fn new(
        disaster: DisasterEvent,
        claims: &[ClaimRecord],
        demos_sent: u32,
        trials_activated: u32,
        revenue_per_trial: u32,
    ) -> Self {
        let totals = ClaimTotals::from_claims(claims);
        Self {
            disaster,
            claims_generated: totals.total_claims,
            auto_approved: totals.auto_approved,
            demos_sent,
            trials_activated,
            estimated_revenue: u64::from(trials_activated) * u64::from(revenue_per_trial),
        }
    }
}
