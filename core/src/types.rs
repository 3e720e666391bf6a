//! Shared primitive types used across the entire pipeline.

/// Identifier of a disaster event, e.g. `NWS-HURRICANE-202610191230`.
pub type EventId = String;

/// Identifier of a claim, e.g. `CLM-1a2b3c4d`.
pub type ClaimId = String;

/// Identifier of a client account, e.g. `CLI-1a2b3c4d`.
pub type ClientId = String;

/// Round a currency or score value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
