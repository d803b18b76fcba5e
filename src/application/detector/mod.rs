//! Surebet detection.
//!
//! The pipeline is a pure function of its input:
//!
//! - [`grouping`]: partition quotes by `(event, market)`
//! - [`selection`]: best odds per outcome, first-seen wins ties
//! - [`evaluation`]: implied sum `S`, arbitrage iff `S < 1` and `1 - S >= min_edge`
//! - [`allocation`]: stakes `bankroll / (odds * S)`
//!
//! [`SurebetDetector`] wires the stages together and assembles one
//! [`Opportunity`] per accepted group.

pub mod allocation;
pub mod config;
pub mod evaluation;
pub mod grouping;
pub mod selection;

use tracing::{debug, info};

use crate::domain::{Opportunity, Quote};

pub use config::DetectorConfig;
pub use evaluation::Evaluation;
pub use grouping::{group_quotes, QuoteGroup};

/// Counters describing what a detection pass did with each group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionSummary {
    /// Quotes consumed.
    pub quotes: usize,
    /// Distinct `(event, market)` groups.
    pub groups: usize,
    /// Groups with fewer than two distinct outcomes.
    pub degenerate: usize,
    /// Groups whose implied sum was 1 or more, or overflowed.
    pub no_arbitrage: usize,
    /// Overbroken groups whose edge fell short of `min_edge`.
    pub below_min_edge: usize,
    /// Accepted groups whose stakes could not be allocated or assembled.
    pub unallocated: usize,
    /// Groups reported as opportunities.
    pub accepted: usize,
}

/// Result of one detection pass.
#[derive(Debug, Clone, Default)]
pub struct Detection {
    /// Accepted opportunities, in order of first group appearance.
    pub opportunities: Vec<Opportunity>,
    /// Per-group bookkeeping.
    pub summary: DetectionSummary,
}

/// Finds surebets in a quote table.
#[derive(Debug, Clone, Default)]
pub struct SurebetDetector {
    config: DetectorConfig,
}

impl SurebetDetector {
    /// Create a detector with the given configuration.
    #[must_use]
    pub const fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Return the current configuration.
    #[must_use]
    pub const fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Return every accepted opportunity in `quotes`.
    ///
    /// An empty result means no arbitrage was found; it is not an error.
    pub fn detect(&self, quotes: &[Quote]) -> Vec<Opportunity> {
        self.scan(quotes).opportunities
    }

    /// Run a detection pass and keep per-group counters.
    pub fn scan(&self, quotes: &[Quote]) -> Detection {
        let groups = group_quotes(quotes);
        let mut detection = Detection {
            opportunities: Vec::new(),
            summary: DetectionSummary {
                quotes: quotes.len(),
                groups: groups.len(),
                ..DetectionSummary::default()
            },
        };

        for group in &groups {
            if let Some(opportunity) = self.evaluate_group(group, &mut detection.summary) {
                detection.opportunities.push(opportunity);
            }
        }

        info!(
            quotes = detection.summary.quotes,
            groups = detection.summary.groups,
            opportunities = detection.summary.accepted,
            "Detection pass complete"
        );

        detection
    }

    fn evaluate_group(
        &self,
        group: &QuoteGroup<'_>,
        summary: &mut DetectionSummary,
    ) -> Option<Opportunity> {
        let event_id = group.event_id();
        let market_type = group.market_type();
        let best = selection::best_prices(group.quotes());

        if best.len() < 2 {
            summary.degenerate += 1;
            debug!(%event_id, %market_type, outcomes = best.len(), "Skipping group with fewer than two outcomes");
            return None;
        }

        let (implied_sum, edge) = match evaluation::evaluate(&best, self.config.min_edge) {
            Evaluation::Accepted { implied_sum, edge } => (implied_sum, edge),
            Evaluation::BelowMinEdge { implied_sum, edge } => {
                summary.below_min_edge += 1;
                debug!(%event_id, %market_type, %implied_sum, %edge, "Edge below minimum");
                return None;
            }
            Evaluation::NoArbitrage { implied_sum } => {
                summary.no_arbitrage += 1;
                debug!(%event_id, %market_type, %implied_sum, "No arbitrage");
                return None;
            }
            Evaluation::Overflow => {
                summary.no_arbitrage += 1;
                debug!(%event_id, %market_type, "Implied sum overflowed, treating as no arbitrage");
                return None;
            }
        };

        let Some(legs) = allocation::allocate(&best, self.config.bankroll, implied_sum) else {
            summary.unallocated += 1;
            debug!(%event_id, %market_type, %implied_sum, "Stake allocation failed");
            return None;
        };

        match Opportunity::try_new(
            event_id.clone(),
            market_type.clone(),
            self.config.bankroll,
            implied_sum,
            legs,
        ) {
            Ok(opportunity) => {
                summary.accepted += 1;
                debug!(%event_id, %market_type, %edge, "Surebet detected");
                Some(opportunity)
            }
            Err(error) => {
                summary.unallocated += 1;
                debug!(%event_id, %market_type, %error, "Could not assemble opportunity");
                None
            }
        }
    }
}

/// Detect surebets with the given configuration.
///
/// Shorthand for `SurebetDetector::new(config.clone()).detect(quotes)`.
pub fn find_surebets(quotes: &[Quote], config: &DetectorConfig) -> Vec<Opportunity> {
    SurebetDetector::new(config.clone()).detect(quotes)
}
