//! Opportunity renderers.
//!
//! [`TextReport`] prints a human-readable block per surebet with a table of
//! legs; [`JsonReport`] emits one JSON document for scripting. Neither
//! touches the numbers beyond display rounding.

use std::io::Write;

use owo_colors::{OwoColorize, Style as Paint};
use rust_decimal::Decimal;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::Opportunity;
use crate::error::Result;
use crate::port::{OpportunityReport, ReportContext};

/// Message printed when a pass finds nothing.
pub const NO_OPPORTUNITIES: &str = "No arbitrage found.";

const RULE_WIDTH: usize = 60;

/// Format a fraction as a percentage with three decimals, e.g. `12.381%`.
pub fn percent(fraction: Decimal) -> String {
    format!("{:.3}%", (fraction * Decimal::ONE_HUNDRED).round_dp(3))
}

/// Format a money amount with two decimals.
pub fn money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

#[derive(Tabled)]
struct LegRow {
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Payout")]
    payout: String,
}

fn leg_table(opportunity: &Opportunity) -> String {
    let rows: Vec<LegRow> = opportunity
        .legs()
        .iter()
        .map(|leg| LegRow {
            outcome: leg.outcome().to_string(),
            odds: leg.odds().normalize().to_string(),
            source: leg.source().to_string(),
            stake: money(leg.stake()),
            payout: money(leg.payout()),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Human-readable report.
pub struct TextReport<W> {
    out: W,
    show_summary: bool,
    color: bool,
}

impl<W: Write> TextReport<W> {
    /// Create a report writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_summary: true,
            color: false,
        }
    }

    /// Enable ANSI colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Toggle the trailing per-group summary line.
    #[must_use]
    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }

    /// Consume the report and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, style: Paint) -> Paint {
        if self.color {
            style
        } else {
            Paint::new()
        }
    }

    fn write_opportunity(&mut self, opportunity: &Opportunity) -> Result<()> {
        let dimmed = self.paint(Paint::new().dimmed());
        let bold = self.paint(Paint::new().bold());
        let green = self.paint(Paint::new().green());

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{}", rule.style(dimmed))?;
        writeln!(
            self.out,
            "Event: {} | Market: {}",
            opportunity.event_id().style(bold),
            opportunity.market_type()
        )?;

        let edge = percent(opportunity.edge());
        let profit = money(opportunity.profit_abs());
        writeln!(
            self.out,
            "Edge: {} | Profit: {} ({}) on {}",
            edge.style(green),
            profit.style(green),
            percent(opportunity.profit_pct()),
            money(opportunity.bankroll()),
        )?;

        for line in leg_table(opportunity).lines() {
            writeln!(self.out, "  {line}")?;
        }
        Ok(())
    }
}

impl<W: Write> OpportunityReport for TextReport<W> {
    fn publish(&mut self, context: &ReportContext, opportunities: &[Opportunity]) -> Result<()> {
        if opportunities.is_empty() {
            writeln!(self.out, "{NO_OPPORTUNITIES}")?;
        }

        for opportunity in opportunities {
            self.write_opportunity(opportunity)?;
        }

        if self.show_summary {
            let summary = &context.summary;
            let dimmed = self.paint(Paint::new().dimmed());
            writeln!(
                self.out,
                "{}",
                format!(
                    "{} quotes, {} markets, {} surebets ({} below min edge, {} single-outcome)",
                    summary.quotes,
                    summary.groups,
                    summary.accepted,
                    summary.below_min_edge,
                    summary.degenerate,
                )
                .style(dimmed)
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}

/// Machine-readable report: a single JSON document.
pub struct JsonReport<W> {
    out: W,
}

impl<W: Write> JsonReport<W> {
    /// Create a report writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the report and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OpportunityReport for JsonReport<W> {
    fn publish(&mut self, context: &ReportContext, opportunities: &[Opportunity]) -> Result<()> {
        let summary = &context.summary;
        let document = json!({
            "bankroll": context.bankroll,
            "min_edge": context.min_edge,
            "count": opportunities.len(),
            "summary": {
                "quotes": summary.quotes,
                "groups": summary.groups,
                "degenerate": summary.degenerate,
                "no_arbitrage": summary.no_arbitrage,
                "below_min_edge": summary.below_min_edge,
                "unallocated": summary.unallocated,
                "accepted": summary.accepted,
            },
            "opportunities": opportunities,
        });

        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
