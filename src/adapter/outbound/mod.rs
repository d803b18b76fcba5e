//! Outbound adapters (driven side).

pub mod report;
