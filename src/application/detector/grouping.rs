//! Partitioning quotes by `(event, market)`.

use std::collections::HashMap;

use crate::domain::{EventId, MarketType, Quote};

/// Quotes sharing one event and market.
#[derive(Debug, Clone)]
pub struct QuoteGroup<'a> {
    event_id: &'a EventId,
    market_type: &'a MarketType,
    quotes: Vec<&'a Quote>,
}

impl<'a> QuoteGroup<'a> {
    /// Get the event ID shared by every quote in the group.
    pub fn event_id(&self) -> &'a EventId {
        self.event_id
    }

    /// Get the market type shared by every quote in the group.
    pub fn market_type(&self) -> &'a MarketType {
        self.market_type
    }

    /// Get the quotes in input order.
    pub fn quotes(&self) -> &[&'a Quote] {
        &self.quotes
    }
}

/// Group quotes by `(event_id, market_type)`.
///
/// Every quote lands in exactly one group. Groups come out in order of first
/// appearance and quotes keep their input order inside each group.
pub fn group_quotes(quotes: &[Quote]) -> Vec<QuoteGroup<'_>> {
    let mut index: HashMap<(&EventId, &MarketType), usize> = HashMap::new();
    let mut groups: Vec<QuoteGroup<'_>> = Vec::new();

    for quote in quotes {
        let key = (quote.event_id(), quote.market_type());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(QuoteGroup {
                event_id: quote.event_id(),
                market_type: quote.market_type(),
                quotes: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].quotes.push(quote);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(event: &str, market: &str, outcome: &str) -> Quote {
        Quote::try_new(event, market, outcome, dec!(2), "BookA").unwrap()
    }

    #[test]
    fn groups_by_event_and_market() {
        let quotes = vec![
            quote("e1", "1X2", "Home"),
            quote("e1", "OU", "Over"),
            quote("e2", "1X2", "Home"),
            quote("e1", "1X2", "Away"),
        ];

        let groups = group_quotes(&quotes);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].event_id().as_str(), "e1");
        assert_eq!(groups[0].market_type().as_str(), "1X2");
        assert_eq!(groups[0].quotes().len(), 2);
        assert_eq!(groups[1].market_type().as_str(), "OU");
        assert_eq!(groups[2].event_id().as_str(), "e2");
    }

    #[test]
    fn every_quote_lands_in_exactly_one_group() {
        let quotes = vec![
            quote("e1", "1X2", "Home"),
            quote("e2", "1X2", "Home"),
            quote("e1", "1X2", "Draw"),
            quote("e2", "1X2", "Away"),
            quote("e3", "OU", "Under"),
        ];

        let groups = group_quotes(&quotes);
        let total: usize = groups.iter().map(|g| g.quotes().len()).sum();

        assert_eq!(total, quotes.len());
    }

    #[test]
    fn preserves_input_order_within_group() {
        let quotes = vec![
            quote("e1", "1X2", "Away"),
            quote("e2", "1X2", "Home"),
            quote("e1", "1X2", "Home"),
        ];

        let groups = group_quotes(&quotes);
        let outcomes: Vec<&str> = groups[0]
            .quotes()
            .iter()
            .map(|q| q.outcome().as_str())
            .collect();

        assert_eq!(outcomes, vec!["Away", "Home"]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_quotes(&[]).is_empty());
    }
}
