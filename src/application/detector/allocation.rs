//! Equal-payout stake allocation.

use rust_decimal::Decimal;

use crate::domain::{Leg, Quote, Stake};

/// Split `bankroll` across the best prices so every outcome pays the same.
///
/// `stake_i = bankroll / (odds_i * S)`, which makes the stakes sum to the
/// bankroll and every leg return `bankroll / S`.
///
/// Returns `None` when `implied_sum` is not positive or a division overflows.
pub fn allocate(best: &[&Quote], bankroll: Stake, implied_sum: Decimal) -> Option<Vec<Leg>> {
    if implied_sum <= Decimal::ZERO {
        return None;
    }

    best.iter()
        .map(|quote| {
            let weight = quote.odds().checked_mul(implied_sum)?;
            let stake = bankroll.checked_div(weight)?;
            Some(Leg::new(
                quote.outcome().clone(),
                quote.odds(),
                quote.source().clone(),
                stake,
            ))
        })
        .collect()
}
