//! Application services (use cases).
//!
//! These services orchestrate domain logic; adapters feed them quotes and
//! render what they return.

pub mod detector;
