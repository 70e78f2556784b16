//! Search result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of catalog entity a search result was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// The course itself (matched on code, name, or description).
    Course,
    /// A syllabus unit (matched on title or contents).
    Unit,
    /// A laboratory experiment (matched on name or description).
    Experiment,
    /// An individual topic string, or a learning outcome.
    Topic,
    /// A reference book or reading material entry.
    Reference,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultKind::Course => "course",
            ResultKind::Unit => "unit",
            ResultKind::Experiment => "experiment",
            ResultKind::Topic => "topic",
            ResultKind::Reference => "reference",
        };
        write!(f, "{name}")
    }
}

/// A single ranked search hit.
///
/// Results are ephemeral: they are produced fresh on every search call and
/// never stored. The `id` is a composite key (kind, course id, sub-indices)
/// guaranteed unique within one call's result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Composite key identifying the matched fragment.
    pub id: String,
    /// What kind of entity matched.
    pub kind: ResultKind,
    /// Display title (course name, unit title, topic text, ...).
    pub title: String,
    /// Display description for the hit.
    pub description: String,
    /// Code of the course the hit belongs to.
    pub course_code: String,
    /// Name of the course the hit belongs to.
    pub course_name: String,
    /// Unit number, for unit hits and topics nested under a unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<u32>,
    /// Relevance score; always greater than zero for an emitted result.
    pub score: u32,
    /// Display text with every query term occurrence wrapped in the
    /// configured highlight tag.
    pub highlighted_text: String,
}
