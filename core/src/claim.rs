//! Claim generation and verification.
//!
//! Each claim draws its two signals, runs them through `ApprovalRule`
//! once, and derives BOTH `verification_status` and `auto_approved` from
//! that single decision. They are never computed separately.

use crate::{
    approval::{ApprovalRule, VerificationStatus},
    catalog::PROPERTY_ADDRESSES,
    error::{PipelineError, PipelineResult},
    rng::{hex_id, EntropySource},
    types::{round2, ClaimId, EventId},
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const SOCIAL_EVIDENCE: RangeInclusive<i64> = 1..=15;
pub const SATELLITE_DAMAGE: RangeInclusive<i64> = 40..=95;
pub const CLAIM_AMOUNT: (f64, f64) = (5_000.0, 150_000.0);
/// Claims arrive 1–120 minutes before generation time.
pub const ARRIVAL_OFFSET_MINUTES: RangeInclusive<i64> = 1..=120;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimRecord {
    pub claim_id: ClaimId,
    pub event_id: EventId,
    pub property_address: String,
    pub claim_amount: f64,
    pub verification_status: VerificationStatus,
    pub social_evidence: i64,
    pub satellite_damage: i64,
    pub auto_approved: bool,
    pub timestamp: DateTime<Utc>,
}

impl ClaimRecord {
    /// Build a record from its drawn signals. The disposition fields are
    /// filled from one `ApprovalRule` decision.
    pub fn verified(
        claim_id: ClaimId,
        event_id: EventId,
        property_address: String,
        claim_amount: f64,
        social_evidence: i64,
        satellite_damage: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let approved = ApprovalRule::decide(social_evidence, satellite_damage);
        Self {
            claim_id,
            event_id,
            property_address,
            claim_amount,
            verification_status: VerificationStatus::from_decision(approved),
            social_evidence,
            satellite_damage,
            auto_approved: approved,
            timestamp,
        }
    }

    /// True when the two disposition fields agree with each other and
    /// with the rule applied to this record's signals.
    pub fn is_consistent(&self) -> bool {
        let expected = ApprovalRule::decide(self.social_evidence, self.satellite_damage);
        self.auto_approved == self.verification_status.is_approved()
            && self.auto_approved == expected
    }
}

pub struct ClaimGenerator;

impl ClaimGenerator {
    /// Generate `count` independent claims against `event_id`.
    ///
    /// A negative count is rejected before any entropy is consumed.
    /// The event id is referential only; it is not checked.
    pub fn generate<R: EntropySource>(
        rng: &mut R,
        now: DateTime<Utc>,
        event_id: &str,
        count: i64,
    ) -> PipelineResult<Vec<ClaimRecord>> {
        let n = usize::try_from(count).map_err(|_| PipelineError::InvalidArgument {
            name: "count",
            reason: format!("claim count must be >= 0, got {count}"),
        })?;

        let claims: Vec<_> = (0..n).map(|_| Self::generate_one(rng, now, event_id)).collect();
        log::debug!(
            "Generated {} claims for {event_id} ({} auto-approved)",
            claims.len(),
            claims.iter().filter(|c| c.auto_approved).count()
        );
        Ok(claims)
    }

    fn generate_one<R: EntropySource>(
        rng: &mut R,
        now: DateTime<Utc>,
        event_id: &str,
    ) -> ClaimRecord {
        let social_evidence = rng.int_range(SOCIAL_EVIDENCE);
        let satellite_damage = rng.int_range(SATELLITE_DAMAGE);
        let claim_id = hex_id(rng, "CLM");
        let property_address = rng.pick(&PROPERTY_ADDRESSES).to_string();
        let claim_amount = round2(rng.uniform(CLAIM_AMOUNT.0, CLAIM_AMOUNT.1));
        let offset = rng.int_range(ARRIVAL_OFFSET_MINUTES);

        ClaimRecord::verified(
            claim_id,
            event_id.to_string(),
            property_address,
            claim_amount,
            social_evidence,
            satellite_damage,
            now - Duration::minutes(offset),
        )
    }
}

/// Aggregates over a full claim batch. Always computed from every
/// generated claim, never from a display subset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClaimTotals {
    pub total_claims: usize,
    pub auto_approved: usize,
    pub pending_review: usize,
    pub total_value: f64,
}

impl ClaimTotals {
    pub fn from_claims(claims: &[ClaimRecord]) -> Self {
        let auto_approved = claims.iter().filter(|c| c.auto_approved).count();
        Self {
            total_claims: claims.len(),
            auto_approved,
            pending_review: claims.len() - auto_approved,
            total_value: claims.iter().map(|c| c.claim_amount).sum(),
        }
    }
}
