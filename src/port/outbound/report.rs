//! Opportunity report port.

use crate::application::detector::DetectionSummary;
use crate::domain::{Edge, Opportunity, Stake};
use crate::error::Result;

/// Parameters of the pass that produced a report.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext {
    /// Bankroll used for stake allocation.
    pub bankroll: Stake,
    /// Minimum edge threshold applied.
    pub min_edge: Edge,
    /// Per-group counters from the pass.
    pub summary: DetectionSummary,
}

/// Consumes the result list of a detection pass.
///
/// Rendering must not alter the opportunities; an empty slice is a valid
/// "nothing found" result.
pub trait OpportunityReport {
    /// Publish the opportunities.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink fails.
    fn publish(&mut self, context: &ReportContext, opportunities: &[Opportunity]) -> Result<()>;
}
