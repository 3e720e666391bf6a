//! Per-event imagery and social-signal analysis.
//!
//! Values are drawn fresh on every call; the event id is echoed, not
//! looked up.

use crate::{rng::EntropySource, types::{round2, EventId}};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const AREA_AFFECTED_SQKM: RangeInclusive<i64> = 50..=200;
pub const BUILDING_DAMAGE_COUNT: RangeInclusive<i64> = 200..=1500;
pub const ESTIMATED_LOSS: RangeInclusive<i64> = 5_000_000..=50_000_000;
pub const ANALYSIS_CONFIDENCE: (f64, f64) = (0.85, 0.98);

pub const TOTAL_POSTS: RangeInclusive<i64> = 50..=300;
pub const DAMAGE_KEYWORDS: RangeInclusive<i64> = 25..=150;
pub const GEO_TAGGED_REPORTS: RangeInclusive<i64> = 10..=80;

const SEVERITIES: [DamageSeverity; 3] = [
    DamageSeverity::Moderate,
    DamageSeverity::Severe,
    DamageSeverity::Catastrophic,
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DamageSeverity {
    Moderate,
    Severe,
    Catastrophic,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    UrgentAssistanceNeeded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SatelliteAnalysis {
    pub area_affected_sqkm: i64,
    pub damage_severity: DamageSeverity,
    pub building_damage_count: i64,
    pub estimated_loss: i64,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialSignals {
    pub total_posts: i64,
    pub damage_keywords: i64,
    pub geo_tagged_reports: i64,
    pub sentiment_analysis: Sentiment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisasterAnalysis {
    pub event_id: EventId,
    pub satellite_analysis: SatelliteAnalysis,
    pub social_signals: SocialSignals,
}

pub struct AnalysisGenerator;

impl AnalysisGenerator {
    pub fn generate<R: EntropySource>(rng: &mut R, event_id: &str) -> DisasterAnalysis {
        let satellite_analysis = SatelliteAnalysis {
            area_affected_sqkm: rng.int_range(AREA_AFFECTED_SQKM),
            damage_severity: *rng.pick(&SEVERITIES),
            building_damage_count: rng.int_range(BUILDING_DAMAGE_COUNT),
            estimated_loss: rng.int_range(ESTIMATED_LOSS),
            confidence_score: round2(rng.uniform(ANALYSIS_CONFIDENCE.0, ANALYSIS_CONFIDENCE.1)),
        };
        let social_signals = SocialSignals {
            total_posts: rng.int_range(TOTAL_POSTS),
            damage_keywords: rng.int_range(DAMAGE_KEYWORDS),
            geo_tagged_reports: rng.int_range(GEO_TAGGED_REPORTS),
            sentiment_analysis: Sentiment::UrgentAssistanceNeeded,
        };

        DisasterAnalysis {
            event_id: event_id.to_string(),
            satellite_analysis,
            social_signals,
        }
    }
}
