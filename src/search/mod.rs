//! Relevance search over a course catalog.
//!
//! This module implements the query-relevance search component: a ranked,
//! capped full-text scan over the in-memory catalog plus a lightweight
//! autocomplete suggestion collector.
//!
//! The entry point is [`SearchService`], constructed once over an immutable
//! course list. Every [`SearchService::search`] call re-walks the catalog
//! from scratch; nothing is indexed or cached, which is acceptable because
//! the corpus is small and static. [`SearchContext`] gives applications an
//! explicit owner for a process-wide service with hot-swap support.

pub mod context;
pub mod highlight;
pub mod query;
pub mod result;
pub mod score;
pub mod service;

// Re-export commonly used types
pub use context::*;
pub use highlight::*;
pub use query::*;
pub use result::*;
pub use score::*;
pub use service::*;
