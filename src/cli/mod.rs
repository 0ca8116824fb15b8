//! Command-line interface for problem-sim.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **find**: List the problems most similar to a given problem
//! - **compare**: Show the similarity score between two problems
//! - **serve**: Start the JSON API server
//!
//! ## Usage
//!
//! ```text
//! # Problems similar to Two Sum, using data in ./data
//! problem-sim find https://leetcode.com/problems/two-sum/ --data ./data
//!
//! # Second page of results, as JSON
//! problem-sim find two-sum --page 2 --format json
//!
//! # Compare two problems
//! problem-sim compare two-sum 3sum
//!
//! # Serve data hosted elsewhere
//! problem-sim serve --data https://example.com/similarity --port 8080
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ConfigError, DataConfig};

pub mod compare;
pub mod find;

#[derive(Parser)]
#[command(name = "problem-sim")]
#[command(version)]
#[command(about = "Find and compare similar coding problems")]
#[command(
    long_about = "problem-sim looks up precomputed similarity scores between coding problems.\n\nIt assembles a sharded similarity matrix, joins it with topic tags and difficulty, and can:\n- Rank every problem by similarity to a given one\n- Report the similarity score between two problems\n- Serve both queries as a JSON API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List problems similar to a given problem
    Find(find::FindArgs),

    /// Compare two problems
    Compare(compare::CompareArgs),

    /// Start the web server
    Serve(ServeArgs),
}

/// Where to load the similarity data from
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// JSON config file describing the data location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory or base URL holding the shards and metadata table
    #[arg(long)]
    pub data: Option<String>,

    /// Number of matrix shards
    #[arg(long)]
    pub shards: Option<usize>,

    /// Metadata table name, path, or URL
    #[arg(long)]
    pub metadata: Option<String>,

    /// Timeout in seconds for fetching each shard
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Fetch shards one after another instead of concurrently
    #[arg(long)]
    pub sequential: bool,
}

impl DataArgs {
    /// Resolve the data configuration: config file (or defaults), then flags
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be loaded or the
    /// resulting configuration is invalid.
    pub fn to_config(&self) -> Result<DataConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DataConfig::load_from_file(path)?,
            None => DataConfig::default(),
        };

        if let Some(base) = &self.data {
            config.base.clone_from(base);
        }
        if let Some(shards) = self.shards {
            config.shard_count = shards;
        }
        if let Some(metadata) = &self.metadata {
            config.metadata.clone_from(metadata);
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if self.sequential {
            config.concurrent_fetch = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
