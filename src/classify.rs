//! Keyword classification of extraction candidates.
//!
//! Listing pages mix genuine research articles with editorials, news
//! blurbs, correction notices, and advance-notice stubs. Each
//! [`JournalSource`] carries include/exclude keyword lists; this module
//! projects a candidate down to one lowercase text line and applies those
//! lists as plain substring tests. The heuristic tolerates false positives
//! and negatives; it exists to cut obvious non-articles, not to be perfect.

use crate::models::{CandidateRecord, JournalSource};

/// Fields whose flattened text makes up the classification projection, in
/// projection order. The list covers both candidate vocabularies: embedded
/// linked-data keys (`@type`, `headline`, `name`, `articleSection`, `genre`,
/// `keywords`) and selector-strategy keys (`kind`, `title`).
const PROJECTION_FIELDS: [&str; 8] = [
    "@type",
    "kind",
    "headline",
    "name",
    "title",
    "articleSection",
    "genre",
    "keywords",
];

/// Decide whether a candidate looks like a research article for `source`.
///
/// Accepted iff the projection contains at least one include term (an empty
/// include list accepts everything) and none of the exclude terms. Registry
/// terms are stored lowercase and the projection is lowercased, so matching
/// is case-insensitive. Term order never changes the outcome.
pub fn classify(candidate: &CandidateRecord, source: &JournalSource) -> bool {
    let projection = projection(candidate);
    let included = source.include_terms.is_empty()
        || source
            .include_terms
            .iter()
            .any(|term| projection.contains(term));
    let excluded = source
        .exclude_terms
        .iter()
        .any(|term| projection.contains(term));
    included && !excluded
}

/// Lowercase single-line text projection of a candidate.
///
/// Flattened field texts are joined with single spaces; empty fields are
/// omitted so they never produce doubled separators.
fn projection(candidate: &CandidateRecord) -> String {
    PROJECTION_FIELDS
        .iter()
        .map(|field| candidate.text(field))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
