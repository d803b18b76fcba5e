//! Inbound ports: where quotes come from.

pub mod source;
