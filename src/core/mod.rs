//! Core data types for similarity lookups.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`ProblemId`]: URL-slug identifier of a problem (e.g. `two-sum`)
//! - [`Difficulty`]: Difficulty label attached to a problem
//! - [`ProblemMetadata`]: Tags and difficulty joined onto query results
//! - [`RankedResult`], [`PairwiseScore`]: Query outputs
//! - [`SimilarityError`]: Every failure a load or query can report
//!
//! ## Identifiers
//!
//! Problems are identified by the slug used in their URL:
//!
//! | URL | Identifier |
//! |-----|------------|
//! | `https://leetcode.com/problems/two-sum/` | `two-sum` |
//! | `https://leetcode.com/problems/sort-an-array/` | `sort-an-array` |
//!
//! The same identifier appears in the matrix header, in the first column of
//! every matrix row, and in the first column of the metadata table.

pub mod error;
pub mod result;
pub mod types;
