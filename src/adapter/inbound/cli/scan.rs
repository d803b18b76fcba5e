//! Handler for the `scan` command.

use std::io;

use tracing::{info, warn};

use crate::adapter::inbound::cli::command::ScanArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::file::FileQuoteSource;
use crate::adapter::outbound::report::{JsonReport, TextReport};
use crate::application::detector::SurebetDetector;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{OpportunityReport, QuoteSource, ReportContext};

/// Execute the scan command.
pub fn execute(args: &ScanArgs) -> Result<()> {
    let config = build_config(args, output::verbosity())?;
    config.init_logging();

    let source = FileQuoteSource::new(&args.input);
    let quotes = source.load()?;
    info!(source = %source.describe(), quotes = quotes.len(), "Quotes loaded");
    if quotes.is_empty() {
        warn!(path = %source.path().display(), "Quote table is empty");
    }

    let detector = SurebetDetector::new(config.detector);
    let detection = detector.scan(&quotes);

    let context = ReportContext {
        bankroll: detector.config().bankroll,
        min_edge: detector.config().min_edge,
        summary: detection.summary,
    };

    let stdout = io::stdout().lock();
    if output::is_json() {
        JsonReport::new(stdout).publish(&context, &detection.opportunities)
    } else {
        TextReport::new(stdout)
            .with_color(output::use_color())
            .with_summary(!output::is_quiet())
            .publish(&context, &detection.opportunities)
    }
}

/// Resolve the effective configuration: CLI flags over file over defaults.
pub(crate) fn build_config(args: &ScanArgs, verbosity: u8) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(bankroll) = args.bankroll {
        config.detector.bankroll = bankroll;
    }
    if let Some(min_edge) = args.min_edge {
        config.detector.min_edge = min_edge;
    }

    match &args.log_level {
        Some(level) => config.logging.level = level.clone(),
        None => match verbosity {
            0 => {}
            1 => config.logging.level = "info".into(),
            _ => config.logging.level = "debug".into(),
        },
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }

    config.validate()?;
    Ok(config)
}
