use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
        /// The TOML text that failed to parse, kept for span diagnostics.
        content: String,
    },

    #[error("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },
}

/// Quote table errors. Row numbers are 1-based.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("unsupported quote file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to read quote file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse quote file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("row {row}: missing required column '{column}'")]
    MissingColumn { row: usize, column: &'static str },

    #[error("row {row}: odds '{value}' is not a number")]
    InvalidOdds { row: usize, value: String },

    #[error("row {row}: {source}")]
    Quote {
        row: usize,
        #[source]
        source: DomainError,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn input_errors_name_the_row() {
        let err = InputError::MissingColumn {
            row: 3,
            column: "odds",
        };
        assert_eq!(err.to_string(), "row 3: missing required column 'odds'");

        let err = InputError::Quote {
            row: 7,
            source: DomainError::NonPositiveOdds { odds: dec!(-2) },
        };
        assert_eq!(err.to_string(), "row 7: odds must be positive, got -2");
    }

    #[test]
    fn config_error_converts_into_crate_error() {
        let err: Error = ConfigError::InvalidValue {
            field: "bankroll",
            reason: "must be greater than 0".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "invalid value for bankroll: must be greater than 0"
        );
    }
}
