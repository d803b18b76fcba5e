//! CLI module graph.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod output;
pub mod scan;

use command::{Cli, Commands, ConfigCommand};

use crate::error::Result;

/// Route a parsed command line to its handler.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Scan(args) => scan::execute(args),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(args.config.as_deref()),
        Commands::Config(ConfigCommand::Validate(args)) => {
            config::execute_validate(args.config.as_deref())
        }
    }
}
