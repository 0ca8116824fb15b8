//! JSON API server for similarity queries.
//!
//! The server loads one [`SimilaritySnapshot`](crate::SimilaritySnapshot) at
//! startup and answers every request from it. Requests share no mutable
//! state, so concurrent or repeated queries cannot interfere.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080 with data from ./data
//! problem-sim serve --data ./data
//!
//! # Custom port and auto-open browser
//! problem-sim serve --port 3000 --open
//!
//! # Bind to all interfaces
//! problem-sim serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /api/similar?problem=<url-or-id>&page=<n>` - One page of similar problems
//! - `GET /api/compare?first=<url-or-id>&second=<url-or-id>` - Score between two problems
//! - `GET /api/status` - Size and load time of the served snapshot

pub mod server;
