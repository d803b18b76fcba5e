//! Best-price selection within a market group.

use crate::domain::Quote;

/// Select the highest-odds quote for each distinct outcome.
///
/// Outcomes come out in the order they were first observed. When several
/// sources quote the same maximal odds, the first one in input order wins; a
/// later quote replaces the current best only if its odds are strictly
/// greater.
pub fn best_prices<'a>(quotes: &[&'a Quote]) -> Vec<&'a Quote> {
    let mut best: Vec<&'a Quote> = Vec::new();

    for &quote in quotes {
        match best.iter_mut().find(|b| b.outcome() == quote.outcome()) {
            Some(current) => {
                if quote.odds() > current.odds() {
                    *current = quote;
                }
            }
            None => best.push(quote),
        }
    }

    best
}
