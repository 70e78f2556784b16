//! The search service: ranked catalog scan and autocomplete suggestions.

use ahash::AHashSet;

use crate::catalog::Course;
use crate::error::Result;
use crate::search::highlight::{HighlightConfig, Highlighter};
use crate::search::query::QueryTerms;
use crate::search::result::{ResultKind, SearchResult};
use crate::search::score::score_text;

/// Configuration for search and suggestion behavior.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of search results to return.
    pub max_results: usize,
    /// Maximum number of autocomplete suggestions to return.
    pub max_suggestions: usize,
    /// Minimum trimmed query length (in characters) for suggestions.
    pub min_suggestion_query_len: usize,
    /// Highlight rendering configuration.
    pub highlight: HighlightConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_results: 50,
            max_suggestions: 10,
            min_suggestion_query_len: 2,
            highlight: HighlightConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Create a new search configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of search results.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the maximum number of suggestions.
    pub fn max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Set the highlight configuration.
    pub fn highlight(mut self, highlight: HighlightConfig) -> Self {
        self.highlight = highlight;
        self
    }
}

/// Relevance search over an immutable course catalog.
///
/// The service holds the course list for its lifetime and never mutates it.
/// Searches are synchronous, pure reads: every call walks the whole catalog
/// afresh, scores each candidate fragment, filters out zero scores, sorts by
/// score descending, and truncates. Nothing is cached between calls.
#[derive(Debug)]
pub struct SearchService {
    courses: Vec<Course>,
    config: SearchConfig,
    highlighter: Highlighter,
}

impl SearchService {
    /// Create a service over a catalog with default configuration.
    pub fn new(courses: Vec<Course>) -> Self {
        Self::with_config(courses, SearchConfig::default())
    }

    /// Create a service over a catalog with a custom configuration.
    pub fn with_config(courses: Vec<Course>, config: SearchConfig) -> Self {
        let highlighter = Highlighter::new(config.highlight.clone());
        SearchService {
            courses,
            config,
            highlighter,
        }
    }

    /// The catalog this service searches.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run a ranked search for a free-text query.
    ///
    /// An empty or whitespace-only query returns an empty list. Results are
    /// sorted by score descending and capped at `max_results`; the relative
    /// order of equal scores is unspecified.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let terms = QueryTerms::parse(query)?;
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        for course in &self.courses {
            self.collect_course(course, &terms, &mut results);
        }

        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(self.config.max_results);
        Ok(results)
    }

    /// Collect all matching fragments for one course.
    fn collect_course(&self, course: &Course, terms: &QueryTerms, results: &mut Vec<SearchResult>) {
        let course_text = format!("{} {} {}", course.name, course.code, course.description);
        self.push_if_relevant(
            results,
            &course_text,
            terms,
            SearchResult {
                id: format!("course-{}", course.id),
                kind: ResultKind::Course,
                title: course.name.clone(),
                description: course.description.clone(),
                course_code: course.code.clone(),
                course_name: course.name.clone(),
                unit_number: None,
                score: 0,
                highlighted_text: String::new(),
            },
            &course.description,
        );

        let Some(syllabus) = &course.syllabus else {
            return;
        };

        for (unit_idx, unit) in syllabus.units.iter().enumerate() {
            let unit_text = format!("{} {}", unit.title, unit.contents);
            self.push_if_relevant(
                results,
                &unit_text,
                terms,
                SearchResult {
                    id: format!("unit-{}-{}", course.id, unit_idx),
                    kind: ResultKind::Unit,
                    title: unit.title.clone(),
                    description: unit.contents.clone(),
                    course_code: course.code.clone(),
                    course_name: course.name.clone(),
                    unit_number: Some(unit.unit_number),
                    score: 0,
                    highlighted_text: String::new(),
                },
                &unit.contents,
            );

            for (topic_idx, topic) in unit.topics.iter().enumerate() {
                self.push_if_relevant(
                    results,
                    topic,
                    terms,
                    SearchResult {
                        id: format!("topic-{}-u{}-{}", course.id, unit_idx, topic_idx),
                        kind: ResultKind::Topic,
                        title: topic.clone(),
                        description: format!("Unit {}: {}", unit.unit_number, unit.title),
                        course_code: course.code.clone(),
                        course_name: course.name.clone(),
                        unit_number: Some(unit.unit_number),
                        score: 0,
                        highlighted_text: String::new(),
                    },
                    topic,
                );
            }
        }

        for (exp_idx, experiment) in syllabus.experiments.iter().enumerate() {
            let experiment_text = format!("{} {}", experiment.name, experiment.description);
            self.push_if_relevant(
                results,
                &experiment_text,
                terms,
                SearchResult {
                    id: format!("experiment-{}-{}", course.id, exp_idx),
                    kind: ResultKind::Experiment,
                    title: experiment.name.clone(),
                    description: experiment.description.clone(),
                    course_code: course.code.clone(),
                    course_name: course.name.clone(),
                    unit_number: None,
                    score: 0,
                    highlighted_text: String::new(),
                },
                &experiment.description,
            );

            for (topic_idx, topic) in experiment.topics.iter().enumerate() {
                self.push_if_relevant(
                    results,
                    topic,
                    terms,
                    SearchResult {
                        id: format!("topic-{}-e{}-{}", course.id, exp_idx, topic_idx),
                        kind: ResultKind::Topic,
                        title: topic.clone(),
                        description: format!(
                            "Experiment {}: {}",
                            experiment.sr_no, experiment.name
                        ),
                        course_code: course.code.clone(),
                        course_name: course.name.clone(),
                        unit_number: None,
                        score: 0,
                        highlighted_text: String::new(),
                    },
                    topic,
                );
            }
        }

        for (ref_idx, reference) in syllabus.references.iter().enumerate() {
            self.push_if_relevant(
                results,
                reference,
                terms,
                SearchResult {
                    id: format!("reference-{}-{}", course.id, ref_idx),
                    kind: ResultKind::Reference,
                    title: reference.clone(),
                    description: format!("Reference for {}", course.name),
                    course_code: course.code.clone(),
                    course_name: course.name.clone(),
                    unit_number: None,
                    score: 0,
                    highlighted_text: String::new(),
                },
                reference,
            );
        }

        for (clo_idx, outcome) in syllabus.outcomes.iter().enumerate() {
            let outcome_text = format!("{} {}", outcome.clo, outcome.description);
            self.push_if_relevant(
                results,
                &outcome_text,
                terms,
                SearchResult {
                    id: format!("topic-{}-clo-{}", course.id, clo_idx),
                    kind: ResultKind::Topic,
                    title: outcome.clo.clone(),
                    description: outcome.description.clone(),
                    course_code: course.code.clone(),
                    course_name: course.name.clone(),
                    unit_number: None,
                    score: 0,
                    highlighted_text: String::new(),
                },
                &outcome.description,
            );
        }
    }

    /// Score a candidate and push it if anything matched.
    ///
    /// `candidate_text` is the text the score is computed over; `display_text`
    /// is the text the highlight markup is applied to.
    fn push_if_relevant(
        &self,
        results: &mut Vec<SearchResult>,
        candidate_text: &str,
        terms: &QueryTerms,
        mut result: SearchResult,
        display_text: &str,
    ) {
        let score = score_text(candidate_text, terms);
        if score == 0 {
            return;
        }

        result.score = score;
        result.highlighted_text = self.highlighter.highlight_terms(display_text, terms);
        results.push(result);
    }

    /// Collect autocomplete suggestions for a partial query.
    ///
    /// A trimmed query shorter than `min_suggestion_query_len` characters
    /// yields nothing. Course names, course codes, unit topics, and
    /// experiment topics whose lower-cased form contains the lower-cased
    /// query are collected in catalog order, de-duplicated keeping the first
    /// occurrence, and capped at `max_suggestions`. No scoring is applied.
    pub fn quick_suggestions(&self, query: &str) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < self.config.min_suggestion_query_len {
            return Vec::new();
        }

        let mut seen = AHashSet::new();
        let mut suggestions = Vec::new();

        for course in &self.courses {
            Self::suggest_candidate(&mut suggestions, &mut seen, &course.name, &needle);
            Self::suggest_candidate(&mut suggestions, &mut seen, &course.code, &needle);

            if let Some(syllabus) = &course.syllabus {
                for unit in &syllabus.units {
                    for topic in &unit.topics {
                        Self::suggest_candidate(&mut suggestions, &mut seen, topic, &needle);
                    }
                }
                for experiment in &syllabus.experiments {
                    for topic in &experiment.topics {
                        Self::suggest_candidate(&mut suggestions, &mut seen, topic, &needle);
                    }
                }
            }

            if suggestions.len() >= self.config.max_suggestions {
                break;
            }
        }

        suggestions.truncate(self.config.max_suggestions);
        suggestions
    }

    /// Add a candidate suggestion if it contains the needle and is new.
    fn suggest_candidate(
        suggestions: &mut Vec<String>,
        seen: &mut AHashSet<String>,
        candidate: &str,
        needle: &str,
    ) {
        if candidate.to_lowercase().contains(needle) && seen.insert(candidate.to_string()) {
            suggestions.push(candidate.to_string());
        }
    }
}
