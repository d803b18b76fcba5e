use rust_decimal::Decimal;
use surebet::domain::Quote;

pub fn quote(event: &str, market: &str, outcome: &str, odds: Decimal, source: &str) -> Quote {
    Quote::try_new(event, market, outcome, odds, source).expect("valid quote")
}

/// Quotes for one market from `(outcome, odds, source)` triples.
pub fn market(event: &str, market_type: &str, legs: &[(&str, Decimal, &str)]) -> Vec<Quote> {
    legs.iter()
        .map(|(outcome, odds, source)| quote(event, market_type, outcome, *odds, source))
        .collect()
}
