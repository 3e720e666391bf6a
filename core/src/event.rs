//! Disaster event generation.
//!
//! Every field is drawn independently: damage score and confidence are
//! not correlated. Events model dashboard data, not a physical process.

use crate::{
    catalog::{Location, EVENT_SOURCE, EVENT_TYPES, LOCATIONS},
    config::CountRange,
    rng::EntropySource,
    types::{round2, EventId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const RADIUS_KM: RangeInclusive<i64> = 15..=80;
pub const DAMAGE_SCORE: RangeInclusive<i64> = 65..=95;
pub const CONFIDENCE: (f64, f64) = (0.75, 0.98);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventType {
    Hurricane,
    Wildfire,
    Flood,
    Tornado,
    Hailstorm,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hurricane => "Hurricane",
            Self::Wildfire => "Wildfire",
            Self::Flood => "Flood",
            Self::Tornado => "Tornado",
            Self::Hailstorm => "Hailstorm",
        }
    }

    /// Upper-case form used inside event identifiers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hurricane => "HURRICANE",
            Self::Wildfire => "WILDFIRE",
            Self::Flood => "FLOOD",
            Self::Tornado => "TORNADO",
            Self::Hailstorm => "HAILSTORM",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
}

/// Point geometry with an affected radius.
/// `coordinates` is `[longitude, latitude]`, GeoJSON order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventGeometry {
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    pub coordinates: [f64; 2],
    pub radius_km: i64,
}

impl EventGeometry {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Events are created active and never transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Active,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisasterEvent {
    pub event_id: EventId,
    pub event_type: EventType,
    pub title: String,
    pub coordinates: EventGeometry,
    pub damage_score: i64,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub status: EventStatus,
}

pub struct EventGenerator;

impl EventGenerator {
    pub fn generate<R: EntropySource>(rng: &mut R, now: DateTime<Utc>) -> DisasterEvent {
        let event_type = *rng.pick(&EVENT_TYPES);
        let location: &Location = rng.pick(&LOCATIONS);
        let radius_km = rng.int_range(RADIUS_KM);
        let damage_score = rng.int_range(DAMAGE_SCORE);
        let confidence = round2(rng.uniform(CONFIDENCE.0, CONFIDENCE.1));

        DisasterEvent {
            event_id: Self::event_id(event_type, now),
            event_type,
            title: format!("{} Alert - {}", event_type.as_str(), location.name),
            coordinates: EventGeometry {
                kind: GeometryKind::Point,
                coordinates: [location.longitude, location.latitude],
                radius_km,
            },
            damage_score,
            confidence,
            timestamp: now,
            status: EventStatus::Active,
        }
    }

    /// `<SOURCE>-<TYPE>-<YYYYMMDDHHmm>`. Two events of the same type in
    /// the same minute share an identifier.
    pub fn event_id(event_type: EventType, now: DateTime<Utc>) -> EventId {
        format!("{EVENT_SOURCE}-{}-{}", event_type.code(), now.format("%Y%m%d%H%M"))
    }

    /// Draw a count from `range`, then that many independent events.
    pub fn generate_active<R: EntropySource>(
        rng: &mut R,
        now: DateTime<Utc>,
        range: CountRange,
    ) -> Vec<DisasterEvent> {
        let n = range.draw(rng);
        let events: Vec<_> = (0..n).map(|_| Self::generate(rng, now)).collect();
        log::debug!("Generated {} active disaster events", events.len());
        events
    }
}
