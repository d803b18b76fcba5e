//! Detected surebet and its legs.
//!
//! An [`Opportunity`] is an immutable computed value: the detector builds it
//! once per accepted market group and nothing mutates it afterwards.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;
use super::id::{EventId, MarketType, OutcomeId, SourceId};
use super::money::{Edge, Odds, Stake};

/// One bet placed on one outcome as part of a surebet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    outcome: OutcomeId,
    odds: Odds,
    source: SourceId,
    stake: Stake,
}

impl Leg {
    /// Create a new leg.
    pub fn new(outcome: OutcomeId, odds: Odds, source: SourceId, stake: Stake) -> Self {
        Self {
            outcome,
            odds,
            source,
            stake,
        }
    }

    /// Get the outcome this leg covers.
    pub fn outcome(&self) -> &OutcomeId {
        &self.outcome
    }

    /// Get the best odds found for the outcome.
    pub fn odds(&self) -> Odds {
        self.odds
    }

    /// Get the source offering the odds.
    pub fn source(&self) -> &SourceId {
        &self.source
    }

    /// Get the amount to place on this leg.
    pub fn stake(&self) -> Stake {
        self.stake
    }

    /// Amount returned if this leg's outcome wins.
    pub fn payout(&self) -> Stake {
        self.stake * self.odds
    }
}

/// A detected surebet.
///
/// Derived values (edge, payout, profit) are computed once in
/// [`Opportunity::try_new`] from the bankroll and the implied probability sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opportunity {
    event_id: EventId,
    market_type: MarketType,
    edge: Edge,
    bankroll: Stake,
    profit_abs: Stake,
    profit_pct: Edge,
    implied_sum: Decimal,
    payout: Stake,
    legs: Vec<Leg>,
}

impl Opportunity {
    /// Build an opportunity, calculating derived fields.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two legs are given, or if `bankroll` or
    /// `implied_sum` is not positive.
    pub fn try_new(
        event_id: EventId,
        market_type: MarketType,
        bankroll: Stake,
        implied_sum: Decimal,
        legs: Vec<Leg>,
    ) -> Result<Self, DomainError> {
        if legs.len() < 2 {
            return Err(DomainError::TooFewLegs { count: legs.len() });
        }
        if bankroll <= Decimal::ZERO {
            return Err(DomainError::NonPositiveBankroll { bankroll });
        }
        if implied_sum <= Decimal::ZERO {
            return Err(DomainError::NonPositiveImpliedSum { implied_sum });
        }

        let edge = Decimal::ONE - implied_sum;
        let payout = bankroll / implied_sum;
        let profit_abs = payout - bankroll;
        let profit_pct = profit_abs / bankroll;

        Ok(Self {
            event_id,
            market_type,
            edge,
            bankroll,
            profit_abs,
            profit_pct,
            implied_sum,
            payout,
            legs,
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

    /// Get the edge (1 - implied sum).
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Get the bankroll distributed across the legs.
    pub fn bankroll(&self) -> Stake {
        self.bankroll
    }

    /// Get the guaranteed absolute profit.
    pub fn profit_abs(&self) -> Stake {
        self.profit_abs
    }

    /// Get the guaranteed profit relative to the bankroll.
    pub fn profit_pct(&self) -> Edge {
        self.profit_pct
    }

    /// Get the sum of implied probabilities of the best odds.
    pub fn implied_sum(&self) -> Decimal {
        self.implied_sum
    }

    /// Get the payout received whichever outcome wins.
    pub fn payout(&self) -> Stake {
        self.payout
    }

    /// Get the legs, in the order outcomes were first observed.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Sum of all leg stakes.
    pub fn total_stake(&self) -> Stake {
        self.legs.iter().map(Leg::stake).sum()
    }
}
