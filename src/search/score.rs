//! Relevance scoring for candidate text fragments.

use crate::search::query::QueryTerms;

/// Score a candidate text fragment against a term list.
///
/// For each query term, all case-insensitive occurrences in the text are
/// counted. A term that occurs at least once contributes `2 × count`, and its
/// raw count is then added again, so each occurrence of a matched term is
/// worth 3. Absent terms contribute 0. The final score is the sum over all
/// terms, counting repeated query terms independently.
///
/// A zero return value means the fragment matched nothing and must not be
/// emitted as a result.
pub fn score_text(text: &str, terms: &QueryTerms) -> u32 {
    let mut score = 0u32;

    for term in terms.iter() {
        let matches = term.count_matches(text);
        if matches > 0 {
            score += 2 * matches;
        }
        score += matches;
    }

    score
}
