//! Course catalog data model and loading.
//!
//! The catalog is the read-only corpus the search layer scans: an in-memory
//! list of [`Course`] values, each optionally carrying a [`Syllabus`] with
//! units, experiments, references, and learning outcomes. Catalogs are
//! typically loaded once at startup from a JSON definition file and never
//! mutated afterwards.

pub mod course;
pub mod loader;
pub mod stats;

// Re-export commonly used types
pub use course::*;
pub use loader::*;
pub use stats::*;
