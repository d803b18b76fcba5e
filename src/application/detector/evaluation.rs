//! Arbitrage condition on a set of best prices.

use rust_decimal::Decimal;

use crate::domain::{Edge, Quote};

/// Outcome of evaluating one group's best prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Implied probabilities sum to 1 or more: no guaranteed profit.
    NoArbitrage { implied_sum: Decimal },
    /// Overbroken market, but the edge is below the configured minimum.
    BelowMinEdge { implied_sum: Decimal, edge: Edge },
    /// Accepted surebet.
    Accepted { implied_sum: Decimal, edge: Edge },
    /// The implied sum left the decimal range; only reachable with
    /// vanishingly small odds, so the sum is far above 1.
    Overflow,
}

impl Evaluation {
    /// True for [`Evaluation::Accepted`].
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Decimal places kept in the implied sum.
///
/// Each reciprocal is rounded at 28 digits, so a fair book such as three
/// outcomes at 3.0 sums to `0.99..9` rather than 1. Rounding the sum well
/// above that noise floor restores exact break-even.
pub const IMPLIED_SUM_SCALE: u32 = 20;

/// Sum of `1 / odds` over the given quotes, rounded to
/// [`IMPLIED_SUM_SCALE`] places. `None` on decimal overflow.
pub fn implied_sum(best: &[&Quote]) -> Option<Decimal> {
    best.iter()
        .try_fold(Decimal::ZERO, |acc, quote| {
            acc.checked_add(quote.implied_probability()?)
        })
        .map(|sum| sum.round_dp(IMPLIED_SUM_SCALE))
}

/// Decide whether the best prices form a surebet worth reporting.
///
/// A candidate needs `S < 1` (strictly; `S == 1` yields zero profit) and is
/// accepted when `1 - S >= min_edge`.
pub fn evaluate(best: &[&Quote], min_edge: Edge) -> Evaluation {
    let Some(implied_sum) = implied_sum(best) else {
        return Evaluation::Overflow;
    };

    if implied_sum >= Decimal::ONE {
        return Evaluation::NoArbitrage { implied_sum };
    }

    let edge = Decimal::ONE - implied_sum;
    if edge < min_edge {
        return Evaluation::BelowMinEdge { implied_sum, edge };
    }

    Evaluation::Accepted { implied_sum, edge }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quotes(odds: &[Decimal]) -> Vec<Quote> {
        odds.iter()
            .enumerate()
            .map(|(i, o)| Quote::try_new("e1", "m", format!("o{i}"), *o, "BookA").unwrap())
            .collect()
    }

    #[test]
    fn accepts_overbroken_two_way_market() {
        let q = quotes(&[dec!(2.50), dec!(2.50)]);
        let refs: Vec<&Quote> = q.iter().collect();

        assert_eq!(
            evaluate(&refs, Decimal::ZERO),
            Evaluation::Accepted {
                implied_sum: dec!(0.8),
                edge: dec!(0.2),
            }
        );
    }

    #[test]
    fn implied_sum_of_exactly_one_is_not_arbitrage() {
        let q = quotes(&[dec!(2), dec!(2)]);
        let refs: Vec<&Quote> = q.iter().collect();

        let result = evaluate(&refs, Decimal::ZERO);
        assert_eq!(result, Evaluation::NoArbitrage { implied_sum: dec!(1) });
        assert!(!result.is_accepted());
    }

    #[test]
    fn fair_book_with_repeating_reciprocals_is_break_even() {
        for odds in [
            vec![dec!(3); 3],
            vec![dec!(9); 9],
            vec![dec!(1.5), dec!(3)],
            vec![dec!(6); 6],
        ] {
            let q = quotes(&odds);
            let refs: Vec<&Quote> = q.iter().collect();

            assert_eq!(implied_sum(&refs), Some(Decimal::ONE), "odds {odds:?}");
            assert_eq!(
                evaluate(&refs, Decimal::ZERO),
                Evaluation::NoArbitrage {
                    implied_sum: Decimal::ONE
                }
            );
        }
    }

    #[test]
    fn rejects_edge_below_minimum() {
        // 1/2.02 + 1/2.02 ~ 0.9901, edge ~ 0.0099
        let q = quotes(&[dec!(2.02), dec!(2.02)]);
        let refs: Vec<&Quote> = q.iter().collect();

        assert!(matches!(
            evaluate(&refs, dec!(0.01)),
            Evaluation::BelowMinEdge { .. }
        ));
        assert!(evaluate(&refs, dec!(0.009)).is_accepted());
    }

    #[test]
    fn edge_equal_to_minimum_is_accepted() {
        let q = quotes(&[dec!(2.5), dec!(2.5)]);
        let refs: Vec<&Quote> = q.iter().collect();

        assert!(evaluate(&refs, dec!(0.2)).is_accepted());
    }

    #[test]
    fn overflowing_sum_is_reported() {
        let tiny = Decimal::new(1, 28);
        let q = quotes(&[tiny, tiny, tiny, tiny, tiny, tiny, tiny, tiny, tiny]);
        let refs: Vec<&Quote> = q.iter().collect();

        assert_eq!(evaluate(&refs, Decimal::ZERO), Evaluation::Overflow);
    }
}
