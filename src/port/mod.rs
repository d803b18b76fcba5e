//! Trait definitions (hexagonal ports).
//!
//! The detector itself never touches I/O. Quotes arrive through a
//! [`QuoteSource`] and opportunities leave through an [`OpportunityReport`],
//! both implemented in [`crate::adapter`].
//!
//! ```text
//!   ┌─────────────┐      ┌────────────────────┐      ┌──────────────┐
//!   │ QuoteSource │ ───▶ │  SurebetDetector   │ ───▶ │ Opportunity  │
//!   │  (file)     │      │  (application)     │      │ Report (cli) │
//!   └─────────────┘      └────────────────────┘      └──────────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::source::QuoteSource;
pub use outbound::report::{OpportunityReport, ReportContext};
