//! Query term splitting.
//!
//! Queries are lower-cased and split on whitespace into literal terms. There
//! is no stemming, stopword removal, or de-duplication: a repeated term
//! counts once per occurrence in the query. Each term carries a compiled
//! case-insensitive regex used for both scoring and highlighting.

use regex::{Regex, RegexBuilder};

use crate::error::{CoursefindError, Result};

/// A single query term with its compiled matcher.
#[derive(Debug, Clone)]
pub struct QueryTerm {
    text: String,
    pattern: Regex,
}

impl QueryTerm {
    /// Create a term from already-lower-cased text.
    fn new(text: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(text))
            .case_insensitive(true)
            .build()
            .map_err(|e| CoursefindError::analysis(format!("bad query term '{text}': {e}")))?;

        Ok(QueryTerm {
            text: text.to_string(),
            pattern,
        })
    }

    /// The lower-cased term text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-insensitive literal matcher for this term.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Count all occurrences of this term in `text`.
    pub fn count_matches(&self, text: &str) -> u32 {
        self.pattern.find_iter(text).count() as u32
    }
}

/// The parsed form of a free-text query.
#[derive(Debug, Clone, Default)]
pub struct QueryTerms {
    terms: Vec<QueryTerm>,
}

impl QueryTerms {
    /// Split a free-text query into terms.
    ///
    /// An empty or whitespace-only query produces an empty term list, which
    /// callers treat as "return nothing" rather than an error.
    pub fn parse(query: &str) -> Result<Self> {
        let terms = query
            .to_lowercase()
            .split_whitespace()
            .map(QueryTerm::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(QueryTerms { terms })
    }

    /// Whether the query contained no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of terms, counting repeats.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Iterate over the terms in query order.
    pub fn iter(&self) -> impl Iterator<Item = &QueryTerm> {
        self.terms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_whitespace() {
        let terms = QueryTerms::parse("Binary   Search\ttree").unwrap();
        let texts: Vec<&str> = terms.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["binary", "search", "tree"]);
    }

    #[test]
    fn test_parse_empty_and_whitespace() {
        assert!(QueryTerms::parse("").unwrap().is_empty());
        assert!(QueryTerms::parse("   \t  ").unwrap().is_empty());
    }

    #[test]
    fn test_repeated_terms_are_kept() {
        let terms = QueryTerms::parse("sort sort").unwrap();
        assert_eq!(terms.len(), 2);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let terms = QueryTerms::parse("c++ (lab)").unwrap();
        let term = terms.iter().next().unwrap();
        assert_eq!(term.count_matches("Advanced C++ Programming"), 1);
        assert_eq!(term.count_matches("plain c"), 0);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let terms = QueryTerms::parse("BINARY").unwrap();
        let term = terms.iter().next().unwrap();
        assert_eq!(term.count_matches("Binary search and binary trees"), 2);
    }
}
