// =============================================================================
// Run configuration: defaults, file loading, validation
// =============================================================================

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::{reference_datasets, Dataset};
use crate::runner::Strategy;

pub const DEFAULT_WORKERS: usize = 4;
pub const MIN_WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 256;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("failed to parse config at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("value {value} for field '{field}' is out of range (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            message: message.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::parse(err.line(), err.column(), err.to_string())
    }
}

/// 1-based line and column of a byte offset into `content`.
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = content.get(..offset).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |tail| tail.chars().count()) + 1;
    (line, column)
}

/// Everything a run needs. Missing fields in a file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub workers: usize,
    pub strategy: Strategy,
    /// Fail instead of warning when some datasets have no worker.
    pub strict: bool,
    pub datasets: Vec<Dataset>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            strategy: Strategy::default(),
            strict: false,
            datasets: reference_datasets(),
        }
    }
}

impl RunConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_datasets(mut self, datasets: Vec<Dataset>) -> Self {
        self.datasets = datasets;
        self
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| {
            // Errors without a span keep the same 0:0 convention as serde_json.
            let (line, column) = err
                .span()
                .map_or((0, 0), |span| line_column(content, span.start));
            ConfigError::parse(line, column, err.message())
        })
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a `.toml` or `.json` file. Unknown extensions are sniffed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            _ if content.trim_start().starts_with('{') => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }

    /// Collect every problem instead of stopping at the first one.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if !(MIN_WORKERS..=MAX_WORKERS).contains(&self.workers) {
            errors.push(ConfigError::OutOfRange {
                field: "workers".to_string(),
                value: self.workers,
                min: MIN_WORKERS,
                max: MAX_WORKERS,
            });
        }

        let mut seen = HashSet::new();
        for (index, dataset) in self.datasets.iter().enumerate() {
            if dataset.name().trim().is_empty() {
                errors.push(ConfigError::invalid_value(
                    format!("datasets[{index}].name"),
                    "name must not be blank",
                ));
            } else if !seen.insert(dataset.name()) {
                errors.push(ConfigError::invalid_value(
                    format!("datasets[{index}].name"),
                    format!("duplicate dataset name '{}'", dataset.name()),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
