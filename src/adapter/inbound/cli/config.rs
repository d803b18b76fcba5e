//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::report::{money, percent};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::{Config, TEMPLATE};

fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn source_label(path: Option<&Path>) -> String {
    path.map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string())
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "status": "created",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your bankroll", path.display()));
    output::note(&format!(
        "2. Run: surebet scan odds.json -c {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<()> {
    let config = load(path)?;

    if output::is_json() {
        output::json_output(serde_json::to_value(&config)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", source_label(path));

    output::section("Detector");
    output::field("Bankroll", money(config.detector.bankroll));
    output::field("Min edge", percent(config.detector.min_edge));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    if output::verbosity() > 0 {
        output::section("TOML");
        for line in config.to_toml()?.lines() {
            output::note(line);
        }
    }
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    let config = load(path)?;

    if output::is_json() {
        output::json_status("config.validate", "valid");
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", source_label(path));
    output::success("Configuration is valid");
    output::field("Bankroll", money(config.detector.bankroll));
    output::field("Min edge", percent(config.detector.min_edge));
    if config.detector.min_edge.is_zero() {
        output::hint("min_edge = 0 reports every overbroken market, however thin");
    }
    Ok(())
}
