//! Report configuration.
//!
//! Values come from built-in defaults, an optional TOML file, and finally
//! command-line overrides applied by the binary. Example file:
//!
//! ```toml
//! team = "FC Bayern Muenchen"
//! tag = "BUNDESLIGA"
//! year = "2019"
//! away_margin = 2
//! delimiter = ","
//! on_malformed = "abort"
//! ```

use crate::error::ConfigError;
use crate::source::MalformedPolicy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_TEAM: &str = "FC Bayern Muenchen";
pub const DEFAULT_TAG: &str = "BUNDESLIGA";
pub const DEFAULT_YEAR: &str = "2019";
pub const DEFAULT_AWAY_MARGIN: i64 = 2;

/// Parameters shared by the report queries and the loader.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Reference team for home/away, outcome and margin queries.
    pub team: String,
    /// Competition label counted in the info column.
    pub tag: String,
    /// Substring of the date column selecting games to regroup.
    pub year: String,
    /// Minimum goal difference for the away-win check.
    pub away_margin: i64,
    pub delimiter: char,
    pub on_malformed: MalformedPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            team: DEFAULT_TEAM.to_string(),
            tag: DEFAULT_TAG.to_string(),
            year: DEFAULT_YEAR.to_string(),
            away_margin: DEFAULT_AWAY_MARGIN,
            delimiter: ',',
            on_malformed: MalformedPolicy::Abort,
        }
    }
}

impl ReportConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents, path)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(ConfigError::Delimiter(self.delimiter))
    }
}
