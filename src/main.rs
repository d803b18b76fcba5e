use clap::Parser;

use surebet::adapter::inbound::cli::command::Cli;
use surebet::adapter::inbound::cli::diagnostic::into_report;
use surebet::adapter::inbound::cli::dispatch;
use surebet::adapter::inbound::cli::output::{self, OutputConfig};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        cli.color,
    ));

    if let Err(e) = dispatch(&cli) {
        eprintln!("{:?}", into_report(e));
        std::process::exit(1);
    }
}
