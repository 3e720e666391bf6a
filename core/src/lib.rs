//! CatastropheIQ core: synthetic disaster, claim, and client generation
//! plus the claims auto-approval rule.
//!
//! RULE: Generators are pure functions of (entropy source, clock reading,
//! arguments). They hold no state between calls and perform no I/O.

pub mod agents;
pub mod analysis;
pub mod approval;
pub mod catalog;
pub mod claim;
pub mod client;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod rng;
pub mod types;
pub mod view;
