//! Claims auto-approval rule.
//!
//! A claim is auto-approved if and only if BOTH signals meet their
//! threshold. Thresholds are inclusive. The rule is total over all
//! integers, including values outside the generators' ranges.

use serde::{Deserialize, Serialize};

/// Minimum corroborating crowd-sourced reports.
pub const MIN_SOCIAL_EVIDENCE: i64 = 3;
/// Minimum imagery-derived damage estimate.
pub const MIN_SATELLITE_DAMAGE: i64 = 70;

pub struct ApprovalRule;

impl ApprovalRule {
    pub fn decide(social_evidence: i64, satellite_damage: i64) -> bool {
        social_evidence >= MIN_SOCIAL_EVIDENCE && satellite_damage >= MIN_SATELLITE_DAMAGE
    }
}

/// Disposition of a claim after the rule has run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    AutoApproved,
    PendingReview,
}

impl VerificationStatus {
    pub fn from_decision(approved: bool) -> Self {
        if approved {
            Self::AutoApproved
        } else {
            Self::PendingReview
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::AutoApproved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoApproved => "auto_approved",
            Self::PendingReview => "pending_review",
        }
    }
}
