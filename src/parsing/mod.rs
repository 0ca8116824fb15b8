//! Parsers for the tabular inputs and problem URLs.
//!
//! This module provides parsers for:
//!
//! - **Comma-delimited tables**: Matrix shards and the metadata table ([`csv`])
//! - **Tag list literals**: Bracket/quote decorated tag runs ([`tags`])
//! - **Metadata tables**: Per-problem tags and difficulty ([`metadata`])
//! - **Problem URLs**: Identifier extraction from a problem page URL ([`url`])
//!
//! ## Example
//!
//! ```rust
//! use problem_sim::parsing::metadata::parse_metadata_text;
//! use problem_sim::parsing::url::problem_id_from_url;
//!
//! let id = problem_id_from_url("https://leetcode.com/problems/two-sum/").unwrap();
//! assert_eq!(id.as_str(), "two-sum");
//!
//! let text = "id,tags,difficulty\ntwo-sum,\"['Array', 'Hash Table']\",Easy\n";
//! let metadata = parse_metadata_text(text);
//! assert_eq!(metadata.get(&id).tags, vec!["Array", "Hash Table"]);
//! ```
//!
//! ## Metadata Table Layout
//!
//! | Field | Content | Example |
//! |-------|---------|---------|
//! | first | Problem identifier | `two-sum` |
//! | middle (k fields) | Stringified tag list, split on commas | `"['Array'`, ` 'Hash Table']"` |
//! | last  | Difficulty label | `Easy` |

pub mod csv;
pub mod metadata;
pub mod tags;
pub mod url;
