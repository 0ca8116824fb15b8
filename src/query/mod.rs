//! Similarity queries over a loaded snapshot.
//!
//! - [`SimilarityEngine`]: Rank queries and pairwise queries
//! - [`pagination`]: Fixed-size pages over ranked results
//!
//! ## Ranking
//!
//! A rank query for problem X reads X's column for every matrix row, sorts
//! the rows by score descending, and excludes X's own row. The sort is
//! stable, so rows with equal scores keep the order they have in the
//! assembled matrix. Each remaining row is joined with its tags and
//! difficulty; problems without metadata get empty tags and `Unknown`.
//!
//! ## Example
//!
//! ```rust
//! use problem_sim::matrix::loader::assemble;
//! use problem_sim::matrix::snapshot::SimilaritySnapshot;
//! use problem_sim::parsing::csv::{split_rows, DELIMITER};
//! use problem_sim::parsing::metadata::MetadataTable;
//! use problem_sim::query::pagination::{page, page_count, PAGE_SIZE};
//! use problem_sim::{ProblemId, SimilarityEngine};
//!
//! let shard = split_rows(",a,b,c\na,1.0,0.8,0.2\nb,0.8,1.0,0.5\nc,0.2,0.5,1.0\n", DELIMITER);
//! let table = assemble(vec![shard]).unwrap();
//! let snapshot = SimilaritySnapshot::new(table, MetadataTable::new());
//!
//! let engine = SimilarityEngine::new(&snapshot);
//! let ranked = engine.rank_similar(&ProblemId::new("a")).unwrap();
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].problem, ProblemId::new("b"));
//!
//! assert_eq!(page_count(ranked.len(), PAGE_SIZE), 1);
//! assert_eq!(page(&ranked, 1, PAGE_SIZE).len(), 2);
//!
//! let pair = engine
//!     .pairwise_similarity(&ProblemId::new("b"), &ProblemId::new("c"))
//!     .unwrap();
//! assert!((pair.score - 0.5).abs() < 1e-9);
//! ```

pub mod engine;
pub mod pagination;

pub use engine::SimilarityEngine;
