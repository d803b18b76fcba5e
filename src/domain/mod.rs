//! Exchange-agnostic domain types.
//!
//! Everything here is a plain value: quotes come in, opportunities go out,
//! and neither carries any I/O.

pub mod error;
pub mod id;
pub mod money;
pub mod opportunity;
pub mod quote;

pub use error::DomainError;
pub use id::{EventId, MarketType, OutcomeId, SourceId};
pub use money::{Edge, Odds, Stake};
pub use opportunity::{Leg, Opportunity};
pub use quote::Quote;
