//! # Coursefind
//!
//! An in-memory relevance search library for university course catalogs.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Ranked full-text search over courses, syllabus units, experiments,
//!   topics, references, and learning outcomes
//! - Byte-offset highlight spans plus configurable HTML highlighting
//! - Substring autocomplete suggestions
//! - Explicit service ownership for corpus hot-swap

pub mod catalog;
pub mod cli;
pub mod error;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
