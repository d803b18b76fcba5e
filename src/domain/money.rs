//! Numeric types for odds, stakes and margins.

use rust_decimal::Decimal;

/// Decimal odds: the payout multiplier per unit staked.
pub type Odds = Decimal;

/// Money amount placed on a leg, or a bankroll.
pub type Stake = Decimal;

/// Fractional margin such as an edge or a relative profit.
pub type Edge = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn odds_times_stake_is_payout() {
        let odds: Odds = dec!(2.50);
        let stake: Stake = dec!(40);

        assert_eq!(odds * stake, dec!(100.00));
    }
}
