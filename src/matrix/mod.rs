//! Similarity matrix ingestion and indexing.
//!
//! The similarity matrix is published as a fixed number of comma-delimited
//! shards. Each shard repeats the same header row (the problem identifiers in
//! canonical column order) followed by a slice of the matrix rows:
//!
//! ```text
//! ,two-sum,3sum,4sum          <- header (first cell labels the ID column)
//! two-sum,1.0,0.81,0.77
//! 3sum,0.81,1.0,0.93
//! ```
//!
//! - [`source`]: Where a shard or metadata table lives and how it is fetched
//! - [`loader`]: Fetches shards and assembles them into one table
//! - [`table`]: The assembled table
//! - [`index`]: Identifier -> column and identifier -> row lookups
//! - [`snapshot`]: The immutable bundle every query reads
//!
//! ## Example
//!
//! ```rust,no_run
//! use problem_sim::config::DataConfig;
//! use problem_sim::matrix::snapshot::SimilaritySnapshot;
//!
//! # async fn demo() -> Result<(), problem_sim::SimilarityError> {
//! let config = DataConfig::default().with_base("https://example.com/data");
//! let snapshot = SimilaritySnapshot::load(&config).await?;
//! println!("{} problems", snapshot.problem_count());
//! # Ok(())
//! # }
//! ```
//!
//! Every shard after the first must list its columns in the same order as
//! the first shard's header. This is not verified cell by cell; a differing
//! header row is only logged.

pub mod index;
pub mod loader;
pub mod snapshot;
pub mod source;
pub mod table;
