//! Error types for loading records and running queries.

use std::path::PathBuf;
use thiserror::Error;

/// A raw row that could not be turned into a [`MatchRecord`](crate::MatchRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {field} must not be empty")]
    EmptyTeam { line: u64, field: &'static str },

    #[error("line {line}: invalid {field} value '{value}'")]
    InvalidGoals {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: row is not valid UTF-8")]
    Encoding { line: u64 },
}

impl RecordError {
    /// Source line the error refers to (1-based, header is line 1).
    pub fn line(&self) -> u64 {
        match self {
            RecordError::FieldCount { line, .. }
            | RecordError::EmptyTeam { line, .. }
            | RecordError::InvalidGoals { line, .. }
            | RecordError::Encoding { line } => *line,
        }
    }
}

/// Failures while reading the record source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed record: {0}")]
    Malformed(#[from] RecordError),
}

/// Failures local to a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("no records to choose from")]
    EmptyCollection,
}

/// Failures reading the optional configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("delimiter must be a single ASCII character, got '{0}'")]
    Delimiter(char),
}
