//! Miette-based error diagnostics for CLI error presentation.
//!
//! Converts crate errors into rich reports with source context, labels, and
//! help suggestions. Config parse errors point into the offending TOML.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error, InputError};

/// Configuration error with optional source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(surebet::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Configuration file content, when the error has a location.
    #[source_code]
    pub src: Option<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: Option<SourceSpan>,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Create a configuration error without source context.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            src: None,
            span: None,
            help: None,
        }
    }

    /// Attach the source text and the byte range to highlight.
    #[must_use]
    pub fn with_source(mut self, src: impl Into<String>, offset: usize, len: usize) -> Self {
        self.src = Some(src.into());
        self.span = Some((offset, len).into());
        self
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Quote table error.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(surebet::input))]
pub struct InputDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl InputDiagnostic {
    /// Create a new input error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Any other failure (I/O, serialization, invariant violations).
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(surebet::error))]
pub struct GeneralDiagnostic {
    /// Human-readable error message.
    pub message: String,
}

const COLUMNS_HELP: &str = "every row needs event_id, market_type, outcome, odds and source";

fn config_diagnostic(err: ConfigError) -> ConfigDiagnostic {
    match err {
        ConfigError::Parse { source, content } => {
            let diagnostic = ConfigDiagnostic::new(format!(
                "failed to parse config: {}",
                source.message()
            ));
            match source.span() {
                Some(span) => diagnostic.with_source(content, span.start, span.len()),
                None => diagnostic,
            }
        }
        ConfigError::InvalidValue { field, reason } => {
            let diagnostic = ConfigDiagnostic::new(format!("invalid value for {field}: {reason}"));
            match field {
                "bankroll" => diagnostic.with_help("bankroll must be a positive amount, e.g. 1000"),
                "min_edge" => diagnostic
                    .with_help("min_edge is a fraction in [0, 1), e.g. 0.0005 for 0.05%"),
                "format" => diagnostic.with_help("use \"pretty\" or \"json\""),
                _ => diagnostic,
            }
        }
        ConfigError::AlreadyExists { path } => {
            ConfigDiagnostic::new(format!("{} already exists", path.display()))
                .with_help("pass --force to overwrite it")
        }
        err @ ConfigError::ReadFile(_) => ConfigDiagnostic::new(err.to_string())
            .with_help("run `surebet config init` to create one"),
    }
}

fn input_diagnostic(err: InputError) -> InputDiagnostic {
    let diagnostic = InputDiagnostic::new(err.to_string());
    match err {
        InputError::UnsupportedFormat { .. } => {
            diagnostic.with_help(
                "quote tables must be .xlsx, .xls, .ods, .csv, .json or .toml files",
            )
        }
        InputError::MissingColumn { .. } => diagnostic.with_help(COLUMNS_HELP),
        InputError::InvalidOdds { .. } => {
            diagnostic.with_help("odds are decimal prices such as 2.10 (a comma separator is accepted)")
        }
        InputError::Quote { .. } => {
            diagnostic.with_help("identifiers must be non-blank and odds greater than zero")
        }
        InputError::ReadFile { .. } | InputError::Parse { .. } => diagnostic,
    }
}

/// Convert a crate error into a renderable report.
#[must_use]
pub fn into_report(err: Error) -> miette::Report {
    match err {
        Error::Config(err) => miette::Report::new(config_diagnostic(err)),
        Error::Input(err) => miette::Report::new(input_diagnostic(err)),
        other => miette::Report::new(GeneralDiagnostic {
            message: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::settings::Config;
    use std::path::PathBuf;

    #[test]
    fn parse_error_carries_source_span() {
        let err = Config::parse_toml("[detector]\nbankroll = \n").unwrap_err();
        let Error::Config(err) = err else {
            panic!("expected config error");
        };

        let diagnostic = config_diagnostic(err);
        assert!(diagnostic.src.is_some());
        assert!(diagnostic.span.is_some());
        assert!(diagnostic.message.starts_with("failed to parse config"));
    }

    #[test]
    fn invalid_bankroll_has_help() {
        let diagnostic = config_diagnostic(ConfigError::InvalidValue {
            field: "bankroll",
            reason: "must be greater than 0".to_string(),
        });
        assert!(diagnostic.help.unwrap().contains("positive"));
        assert!(diagnostic.span.is_none());
    }

    #[test]
    fn already_exists_suggests_force() {
        let diagnostic = config_diagnostic(ConfigError::AlreadyExists {
            path: PathBuf::from("surebet.toml"),
        });
        assert_eq!(diagnostic.message, "surebet.toml already exists");
        assert!(diagnostic.help.unwrap().contains("--force"));
    }

    #[test]
    fn missing_column_lists_required_columns() {
        let diagnostic = input_diagnostic(InputError::MissingColumn {
            row: 4,
            column: "odds",
        });
        assert_eq!(diagnostic.message, "row 4: missing required column 'odds'");
        assert_eq!(diagnostic.help.as_deref(), Some(COLUMNS_HELP));
    }

    #[test]
    fn report_keeps_error_message() {
        let report = into_report(
            InputError::InvalidOdds {
                row: 2,
                value: "evens".to_string(),
            }
            .into(),
        );
        assert_eq!(report.to_string(), "row 2: odds 'evens' is not a number");
    }
}
