//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors when an input violates
//! a domain invariant.
//!
//! # Examples
//!
//! ```
//! use surebet::domain::{DomainError, Quote};
//! use rust_decimal_macros::dec;
//!
//! let result = Quote::try_new("match-1", "1X2", "Home", dec!(0), "BookA");
//!
//! assert!(matches!(result, Err(DomainError::NonPositiveOdds { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Odds must be strictly positive; the reciprocal is undefined otherwise.
    #[error("odds must be positive, got {odds}")]
    NonPositiveOdds {
        /// The invalid odds that were provided.
        odds: rust_decimal::Decimal,
    },

    /// Identifier fields cannot be empty.
    #[error("{field} cannot be empty")]
    EmptyIdentifier {
        /// Name of the empty field.
        field: &'static str,
    },

    /// Bankroll must be positive to allocate stakes.
    #[error("bankroll must be positive, got {bankroll}")]
    NonPositiveBankroll {
        /// The invalid bankroll that was provided.
        bankroll: rust_decimal::Decimal,
    },

    /// The sum of implied probabilities must be positive to allocate stakes.
    #[error("implied probability sum must be positive, got {implied_sum}")]
    NonPositiveImpliedSum {
        /// The degenerate sum.
        implied_sum: rust_decimal::Decimal,
    },

    /// Opportunities must have at least two legs.
    #[error("an opportunity needs at least two legs, got {count}")]
    TooFewLegs {
        /// Number of legs provided.
        count: usize,
    },
}
