//! A single price offered by one source for one outcome.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;
use super::id::{EventId, MarketType, OutcomeId, SourceId};
use super::money::Odds;

/// One offered price.
///
/// Construction goes through [`Quote::try_new`], which rejects non-positive
/// odds and blank identifiers, so every `Quote` in the system has a
/// well-defined implied probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    event_id: EventId,
    market_type: MarketType,
    outcome: OutcomeId,
    odds: Odds,
    source: SourceId,
}

impl Quote {
    /// Create a validated quote.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveOdds`] if `odds <= 0` and
    /// [`DomainError::EmptyIdentifier`] if any identifier is blank.
    pub fn try_new(
        event_id: impl Into<EventId>,
        market_type: impl Into<MarketType>,
        outcome: impl Into<OutcomeId>,
        odds: Odds,
        source: impl Into<SourceId>,
    ) -> Result<Self, DomainError> {
        let event_id = event_id.into();
        let market_type = market_type.into();
        let outcome = outcome.into();
        let source = source.into();

        if event_id.is_blank() {
            return Err(DomainError::EmptyIdentifier { field: "event_id" });
        }
        if market_type.is_blank() {
            return Err(DomainError::EmptyIdentifier {
                field: "market_type",
            });
        }
        if outcome.is_blank() {
            return Err(DomainError::EmptyIdentifier { field: "outcome" });
        }
        if source.is_blank() {
            return Err(DomainError::EmptyIdentifier { field: "source" });
        }
        if odds <= Decimal::ZERO {
            return Err(DomainError::NonPositiveOdds { odds });
        }

        Ok(Self {
            event_id,
            market_type,
            outcome,
            odds,
            source,
        })
    }

    /// Get the event ID.
    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// Get the market type.
    pub fn market_type(&self) -> &MarketType {
        &self.market_type
    }

    /// Get the outcome.
    pub fn outcome(&self) -> &OutcomeId {
        &self.outcome
    }

    /// Get the decimal odds.
    pub fn odds(&self) -> Odds {
        self.odds
    }

    /// Get the quoting source.
    pub fn source(&self) -> &SourceId {
        &self.source
    }

    /// Implied probability of this price, `1 / odds`.
    ///
    /// Returns `None` only if the division overflows the decimal range.
    pub fn implied_probability(&self) -> Option<Decimal> {
        Decimal::ONE.checked_div(self.odds)
    }
}
