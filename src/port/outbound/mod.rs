//! Outbound ports: where opportunities go.

pub mod report;
