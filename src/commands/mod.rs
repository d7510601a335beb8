//! Command handlers
//!
//! Thin wrappers over the use cases: parse arguments into domain payloads,
//! execute, and print what the dashboard would have rendered.

pub mod auth;
pub mod clients;
pub mod cohorts;
pub mod documents;
pub mod notifications;
pub mod progress;
