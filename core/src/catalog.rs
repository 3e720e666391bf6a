//! Static reference tables used by the generators.
//!
//! RULE: Generators select from these tables; they never embed literal
//! names, addresses, or coordinates inline. Tables may grow, but existing
//! entries keep their order so seeded runs stay reproducible.

use crate::{client::ClientStatus, event::EventType};

/// A named point the event generator can place a disaster at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// A fixed client roster entry. Status is a roster property, never drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub status: ClientStatus,
}

pub const EVENT_TYPES: [EventType; 5] = [
    EventType::Hurricane,
    EventType::Wildfire,
    EventType::Flood,
    EventType::Tornado,
    EventType::Hailstorm,
];

pub const LOCATIONS: [Location; 5] = [
    Location { name: "Miami-Dade, FL",  latitude: 25.7617, longitude: -80.1918 },
    Location { name: "Los Angeles, CA", latitude: 34.0522, longitude: -118.2437 },
    Location { name: "Houston, TX",     latitude: 29.7604, longitude: -95.3698 },
    Location { name: "Phoenix, AZ",     latitude: 33.4484, longitude: -112.0740 },
    Location { name: "Tampa, FL",       latitude: 27.9506, longitude: -82.4572 },
];

pub const PROPERTY_ADDRESSES: [&str; 5] = [
    "1234 Ocean Drive, Miami Beach, FL 33139",
    "5678 Sunset Blvd, Los Angeles, CA 90028",
    "9101 Main St, Houston, TX 77002",
    "1121 Central Ave, Phoenix, AZ 85004",
    "3141 Bay Shore Blvd, Tampa, FL 33629",
];

pub const COMPANIES: [CompanyProfile; 5] = [
    CompanyProfile {
        name: "Florida Mutual Insurance",
        email: "claims@flmutual.com",
        status: ClientStatus::TrialActive,
    },
    CompanyProfile {
        name: "Sunstate Coverage Corp",
        email: "operations@sunstate.com",
        status: ClientStatus::PayingClient,
    },
    CompanyProfile {
        name: "Gulf Coast Insurers",
        email: "tech@gulfcoast.com",
        status: ClientStatus::DemoSent,
    },
    CompanyProfile {
        name: "Lone Star Insurance",
        email: "claims@lonestar.com",
        status: ClientStatus::TrialActive,
    },
    CompanyProfile {
        name: "Pacific Risk Management",
        email: "api@pacificrisk.com",
        status: ClientStatus::PayingClient,
    },
];

/// Feed that detected the event; leads every event identifier.
pub const EVENT_SOURCE: &str = "NWS";
