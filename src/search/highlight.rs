//! Match highlighting for search results.
//!
//! Two representations are offered. [`find_spans`] returns byte-offset spans
//! so a UI can render matches with whatever markup it wants. [`Highlighter`]
//! renders an HTML string directly, wrapping every term occurrence in a
//! configurable tag (`<mark>` by default); this is the text carried on
//! [`SearchResult`](crate::search::SearchResult).

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::search::query::QueryTerms;

/// Configuration for HTML highlighting.
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// HTML tag to wrap highlighted terms (e.g. "mark", "em", "strong").
    pub tag: String,
    /// CSS class to add to highlight tags.
    pub css_class: Option<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "mark".to_string(),
            css_class: None,
        }
    }
}

impl HighlightConfig {
    /// Create a new highlight configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML tag for highlighting.
    pub fn tag(mut self, tag: String) -> Self {
        self.tag = tag;
        self
    }

    /// Set the CSS class for highlight tags.
    pub fn css_class(mut self, css_class: String) -> Self {
        self.css_class = Some(css_class);
        self
    }

    /// Build the opening HTML tag.
    pub fn opening_tag(&self) -> String {
        if let Some(ref css_class) = self.css_class {
            format!("<{} class=\"{}\">", self.tag, css_class)
        } else {
            format!("<{}>", self.tag)
        }
    }

    /// Build the closing HTML tag.
    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// A matched region of a display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    /// Byte range of the match in the original text.
    pub range: Range<usize>,
    /// The (lower-cased) query term that produced the match.
    pub term: String,
}

/// Find all term match spans in a text, sorted by start position.
///
/// Spans from different terms may overlap; spans from a single term never do.
/// All ranges lie within `text` and fall on character boundaries.
pub fn find_spans(text: &str, terms: &QueryTerms) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();

    for term in terms.iter() {
        for mat in term.pattern().find_iter(text) {
            spans.push(HighlightSpan {
                range: mat.range(),
                term: term.text().to_string(),
            });
        }
    }

    spans.sort_by_key(|span| (span.range.start, span.range.end));
    spans
}

/// Renders highlighted HTML strings for search results.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a new highlighter.
    pub fn new(config: HighlightConfig) -> Self {
        Highlighter { config }
    }

    /// Wrap every occurrence of every query term in the configured tag.
    ///
    /// Terms are applied one at a time over the whole text, each replacement
    /// preserving the matched text's original case. Where two terms cover
    /// overlapping character ranges the later term's wrapping lands inside
    /// the earlier one's output, so the last-applied term wins; this is the
    /// expected behavior for multi-term queries and is not specially
    /// resolved.
    pub fn highlight_terms(&self, text: &str, terms: &QueryTerms) -> String {
        let opening = self.config.opening_tag();
        let closing = self.config.closing_tag();
        let mut result = text.to_string();

        for term in terms.iter() {
            result = term
                .pattern()
                .replace_all(&result, |caps: &regex::Captures| {
                    format!("{}{}{}", opening, &caps[0], closing)
                })
                .to_string();
        }

        result
    }
}
