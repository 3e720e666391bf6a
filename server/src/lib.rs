//! HTTP surface for the CatastropheIQ dashboard.
//!
//! Handlers are thin: each one calls a single `PipelineEngine`
//! operation and serializes the returned view.

pub mod routes;
pub mod settings;
