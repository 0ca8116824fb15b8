//! # problem-sim
//!
//! A library for finding coding problems similar to a given one, and for
//! comparing two problems, using a precomputed similarity matrix.
//!
//! The matrix is published as several comma-delimited shards that share a
//! header row listing every problem identifier. A separate metadata table
//! carries each problem's topic tags and difficulty. `problem-sim` assembles
//! the shards, indexes them by identifier, and answers two kinds of query:
//!
//! - **Rank queries**: every other problem, ordered by descending similarity
//! - **Pairwise queries**: the score between two named problems
//!
//! ## Features
//!
//! - **Sharded ingestion**: Shards fetched from disk or HTTP, concurrently or in order
//! - **Deterministic ranking**: Stable sort, ties keep matrix row order
//! - **Self-exclusion**: The query problem never appears in its own results
//! - **Metadata join**: Tags and difficulty, with defaults for unknown problems
//! - **Pagination**: Fixed pages of ten results
//!
//! ## Example
//!
//! ```rust,no_run
//! use problem_sim::config::DataConfig;
//! use problem_sim::matrix::snapshot::SimilaritySnapshot;
//! use problem_sim::parsing::url::problem_id_from_url;
//! use problem_sim::SimilarityEngine;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = DataConfig::default().with_base("data");
//! let snapshot = SimilaritySnapshot::load(&config).await?;
//!
//! let id = problem_id_from_url("https://leetcode.com/problems/two-sum/")?;
//! let engine = SimilarityEngine::new(&snapshot);
//! for result in engine.rank_similar(&id)?.iter().take(5) {
//!     println!("{}: {:.2}", result.problem.display_title(), result.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Where the shards and metadata live
//! - [`core`]: Identifiers, metadata, results and errors
//! - [`matrix`]: Shard loading, table assembly and indexing
//! - [`parsing`]: Table, tag list and URL parsers
//! - [`query`]: Rank/pairwise queries and pagination
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON API server

pub mod cli;
pub mod config;
pub mod core;
pub mod matrix;
pub mod parsing;
pub mod query;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::error::SimilarityError;
pub use crate::core::result::{PairwiseScore, RankedResult};
pub use crate::core::types::*;
pub use crate::matrix::snapshot::SimilaritySnapshot;
pub use crate::query::engine::SimilarityEngine;
