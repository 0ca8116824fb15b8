//! Data location configuration.
//!
//! Describes where the matrix shards and the metadata table live. The
//! defaults match the published data set: four shards named
//! `sorted_similarities_with_scores_chunk_{n}.csv` and a metadata table
//! `leetcode_q_full_info.csv`, all in the current directory.
//!
//! A configuration can also be read from a JSON file; missing fields take
//! their default values:
//!
//! ```json
//! {
//!   "base": "https://example.com/data",
//!   "shard_count": 4,
//!   "timeout_secs": 10
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matrix::source::DataSource;

/// Placeholder replaced by the 1-based shard number in `shard_pattern`
pub const SHARD_NUMBER_PLACEHOLDER: &str = "{n}";

pub const DEFAULT_SHARD_PATTERN: &str = "sorted_similarities_with_scores_chunk_{n}.csv";
pub const DEFAULT_SHARD_COUNT: usize = 4;
pub const DEFAULT_METADATA_NAME: &str = "leetcode_q_full_info.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Where the similarity data lives and how to fetch it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory or base URL that shard and metadata names are resolved against
    pub base: String,
    /// Shard file name with `{n}` standing for the shard number
    pub shard_pattern: String,
    pub shard_count: usize,
    /// Metadata table name (or absolute path / URL)
    pub metadata: String,
    /// Per-resource fetch timeout
    pub timeout_secs: u64,
    /// Fetch shards in parallel; assembly order is unaffected
    pub concurrent_fetch: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base: ".".to_string(),
            shard_pattern: DEFAULT_SHARD_PATTERN.to_string(),
            shard_count: DEFAULT_SHARD_COUNT,
            metadata: DEFAULT_METADATA_NAME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            concurrent_fetch: true,
        }
    }
}

impl DataConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, is not valid JSON,
    /// or describes an unusable configuration.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for invalid JSON and
    /// `ConfigError::Invalid` if validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can describe a matrix
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for zero shards, a multi-shard pattern
    /// without `{n}`, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shard_count == 0 {
            return Err(ConfigError::Invalid(
                "shard_count must be at least 1".to_string(),
            ));
        }
        if self.shard_count > 1 && !self.shard_pattern.contains(SHARD_NUMBER_PLACEHOLDER) {
            return Err(ConfigError::Invalid(format!(
                "shard_pattern '{}' must contain {SHARD_NUMBER_PLACEHOLDER} when shard_count > 1",
                self.shard_pattern
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    #[must_use]
    pub fn with_shard_count(mut self, count: usize) -> Self {
        self.shard_count = count;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Shard sources in assembly order
    #[must_use]
    pub fn shard_sources(&self) -> Vec<DataSource> {
        (1..=self.shard_count)
            .map(|n| {
                let name = self
                    .shard_pattern
                    .replace(SHARD_NUMBER_PLACEHOLDER, &n.to_string());
                DataSource::resolve(&self.base, &name)
            })
            .collect()
    }

    #[must_use]
    pub fn metadata_source(&self) -> DataSource {
        DataSource::resolve(&self.base, &self.metadata)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_default_shard_sources() {
        let config = DataConfig::default().with_base("https://example.com/data");
        let shards = config.shard_sources();
        assert_eq!(shards.len(), 4);
        assert_eq!(
            shards[0],
            DataSource::Http(
                "https://example.com/data/sorted_similarities_with_scores_chunk_1.csv".to_string()
            )
        );
        assert_eq!(
            shards[3].location(),
            "https://example.com/data/sorted_similarities_with_scores_chunk_4.csv"
        );
        assert_eq!(
            config.metadata_source(),
            DataSource::Http("https://example.com/data/leetcode_q_full_info.csv".to_string())
        );
    }

    #[test]
    fn test_local_sources() {
        let config = DataConfig::default().with_base("data").with_shard_count(2);
        let shards = config.shard_sources();
        assert_eq!(
            shards[1],
            DataSource::File(PathBuf::from("data").join("sorted_similarities_with_scores_chunk_2.csv"))
        );
    }

    #[test]
    fn test_from_json_uses_defaults_for_missing_fields() {
        let config = DataConfig::from_json(r#"{"base": "/srv/data", "shard_count": 2}"#).unwrap();
        assert_eq!(config.base, "/srv/data");
        assert_eq!(config.shard_count, 2);
        assert_eq!(config.metadata, DEFAULT_METADATA_NAME);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.concurrent_fetch);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            DataConfig::from_json(r#"{"shard_count": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DataConfig::from_json(r#"{"shard_pattern": "matrix.csv", "shard_count": 3}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DataConfig::from_json(r#"{"timeout_secs": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DataConfig::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_single_shard_without_placeholder() {
        let config =
            DataConfig::from_json(r#"{"shard_pattern": "matrix.csv", "shard_count": 1}"#).unwrap();
        assert_eq!(
            config.shard_sources(),
            vec![DataSource::File(PathBuf::from(".").join("matrix.csv"))]
        );
    }
}
