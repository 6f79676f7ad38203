//! Data models for journal sources, extraction candidates, and articles.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`JournalSource`]: Immutable descriptor for one scraped journal
//! - [`Strategy`]: Extraction strategy attached to each source
//! - [`CandidateRecord`]: Loosely-typed bag of extracted fields prior to validation
//! - [`Article`]: Canonical normalized article record
//! - [`AggregatedFeed`]: Final deduplicated, recency-ordered article list
//! - [`SkipReason`]: Recoverable per-candidate failures absorbed by the pipeline
//!
//! Candidate fields are kept as raw [`serde_json::Value`]s so embedded
//! linked-data shapes (strings, nested objects, lists) survive extraction
//! untouched. [`flatten_value`] is the single routine that projects any such
//! shape down to comparable text; both extraction strategies and the
//! classifier go through it rather than rolling their own.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use url::Url;

use crate::scrapers::cards::CardPattern;

/// A journal listing page to scrape, plus the heuristics applied to it.
///
/// Descriptors live in [`crate::sources::REGISTRY`], are constructed at
/// compile time, and are passed by reference everywhere; nothing mutates
/// them after startup.
#[derive(Debug, Clone, Copy)]
pub struct JournalSource {
    /// Unique source identifier, also used as the feed entry title prefix.
    pub name: &'static str,
    /// Listing endpoint fetched for new articles.
    pub url: &'static str,
    /// Base URL that relative article links are resolved against.
    pub base_url: &'static str,
    /// Terms of which at least one must appear in the classification
    /// projection. An empty list accepts everything.
    pub include_terms: &'static [&'static str],
    /// Terms none of which may appear in the classification projection.
    pub exclude_terms: &'static [&'static str],
    /// How candidate records are extracted from this source's markup.
    pub strategy: Strategy,
}

impl JournalSource {
    /// Resolve a possibly-relative article link against this source's base.
    ///
    /// Absolute links pass through untouched; anything else is joined onto
    /// `base_url`. `None` when the href is empty or cannot be made absolute.
    pub fn resolve_link(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        match Url::parse(href) {
            Ok(url) => Some(url.to_string()),
            Err(_) => Url::parse(self.base_url)
                .and_then(|base| base.join(href))
                .ok()
                .map(|url| url.to_string()),
        }
    }
}

/// Extraction strategy for a source, resolved statically in the registry.
///
/// Each source carries exactly one strategy; dispatch happens on this tag,
/// never on runtime sniffing of the markup.
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Walk repeating article-card structures using a per-journal pattern.
    Cards(&'static CardPattern),
    /// Walk every embedded JSON-LD block on the page, layout-independent.
    JsonLd,
}

/// Why a candidate or block was dropped before reaching the feed.
///
/// These failures are recoverable: extraction and assembly absorb them and
/// the per-source pipeline logs counts instead of surfacing each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// An embedded structured-data block failed to parse.
    UnclassifiableBlock,
    /// The candidate lacks a resolvable title or link.
    IncompleteCandidate,
}

/// A loosely-typed bag of fields extracted for one candidate article.
///
/// Selector-strategy candidates use the keys `title`, `link`, `summary`,
/// `date`, and `kind`; embedded-data candidates keep whatever keys the
/// linked-data entity carried (`@type`, `headline`, `url`, `datePublished`,
/// ...). Readers go through [`CandidateRecord::text`] and
/// [`CandidateRecord::first_text`], which flatten nested values and
/// substitute the empty string for anything missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateRecord {
    fields: Map<String, Value>,
}

impl CandidateRecord {
    /// Create an empty record; the selector engine fills it field by field.
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Wrap a parsed linked-data entity without reshaping it.
    pub fn from_object(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Store a plain text field.
    pub fn insert_text(&mut self, key: &str, value: impl Into<String>) {
        self.fields
            .insert(key.to_string(), Value::String(value.into()));
    }

    /// Raw value for `key`, if the extractor captured one.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Flattened text of `key`, or `""` when absent.
    pub fn text(&self, key: &str) -> String {
        self.fields.get(key).map(flatten_value).unwrap_or_default()
    }

    /// Flattened text of the first key that yields non-empty text.
    pub fn first_text(&self, keys: &[&str]) -> String {
        for key in keys {
            let text = self.text(key);
            if !text.is_empty() {
                return text;
            }
        }
        String::new()
    }
}

/// A normalized research article ready for aggregation.
///
/// Constructed only by the record assembler, which guarantees a non-empty
/// title and an absolute link. The link doubles as the article's identity:
/// aggregation treats equal links as the same article and keeps the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Article headline.
    pub title: String,
    /// Absolute article URL; the deduplication key.
    pub link: String,
    /// Listing-page abstract or contributor line; possibly empty.
    pub summary: String,
    /// Publication time when one could be recovered; `None` means unknown
    /// and sorts after every dated article.
    pub published: Option<DateTime<Utc>>,
    /// Name of the [`JournalSource`] the article came from.
    pub source: String,
}

/// The final article list handed to the feed serializer.
///
/// Invariants upheld by [`crate::aggregate::aggregate`]: links are pairwise
/// distinct and ordering is non-increasing by published time, with undated
/// articles last.
#[derive(Debug, Default)]
pub struct AggregatedFeed {
    /// Articles in feed order.
    pub articles: Vec<Article>,
}

impl AggregatedFeed {
    /// Number of articles in the feed.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the feed holds no articles at all.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Flatten any extracted field value into a single line of text.
///
/// Leaf values (strings, numbers, booleans) are joined with single spaces,
/// recursing through objects and lists of any depth; string leaves have
/// internal whitespace runs collapsed. Nulls and empty strings vanish, so an
/// absent or null field always projects to `""`, never to a literal "null".
pub fn flatten_value(value: &Value) -> String {
    let mut parts = Vec::new();
    collect_leaves(value, &mut parts);
    parts.join(" ")
}

fn collect_leaves(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push(b.to_string()),
        Value::Number(n) => out.push(n.to_string()),
        Value::String(s) => {
            let collapsed = collapse_whitespace(s);
            if !collapsed.is_empty() {
                out.push(collapsed);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_leaves(item, out);
            }
        }
        Value::Object(map) => {
            for nested in map.values() {
                collect_leaves(nested, out);
            }
        }
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_plain_string() {
        assert_eq!(flatten_value(&json!("Gene editing")), "Gene editing");
    }

    #[test]
    fn test_flatten_collapses_inner_whitespace() {
        assert_eq!(
            flatten_value(&json!("  CRISPR \n screens\t in vivo ")),
            "CRISPR screens in vivo"
        );
    }

    #[test]
    fn test_flatten_nested_shapes() {
        let value = json!({
            "keywords": ["genomics", {"label": "cell  biology"}],
            "wordCount": 4200,
            "empty": "",
            "missing": null
        });
        // Map keys iterate in sorted order, so the projection is stable.
        assert_eq!(flatten_value(&value), "genomics cell biology 4200");
    }

    #[test]
    fn test_flatten_list_of_leaves() {
        assert_eq!(
            flatten_value(&json!(["ScholarlyArticle", "CreativeWork"])),
            "ScholarlyArticle CreativeWork"
        );
    }

    #[test]
    fn test_candidate_text_missing_field_is_empty() {
        let candidate = CandidateRecord::new();
        assert_eq!(candidate.text("headline"), "");
    }

    #[test]
    fn test_candidate_first_text_priority() {
        let mut candidate = CandidateRecord::new();
        candidate.insert_text("name", "Fallback name");
        candidate.insert_text("headline", "Preferred headline");
        assert_eq!(
            candidate.first_text(&["headline", "name"]),
            "Preferred headline"
        );
        assert_eq!(candidate.first_text(&["missing", "name"]), "Fallback name");
        assert_eq!(candidate.first_text(&["missing", "absent"]), "");
    }

    #[test]
    fn test_candidate_from_object_keeps_raw_values() {
        let entity = json!({"mainEntityOfPage": {"@id": "https://x/1"}});
        let candidate = CandidateRecord::from_object(entity.as_object().unwrap().clone());
        assert!(candidate.get("mainEntityOfPage").unwrap().is_object());
        assert_eq!(candidate.text("mainEntityOfPage"), "https://x/1");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a\t b \n"), "a b");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_resolve_link() {
        let source = JournalSource {
            name: "Test Journal",
            url: "https://journal.example/latest",
            base_url: "https://journal.example",
            include_terms: &[],
            exclude_terms: &[],
            strategy: Strategy::JsonLd,
        };
        assert_eq!(
            source.resolve_link("/articles/s41586"),
            Some("https://journal.example/articles/s41586".to_string())
        );
        assert_eq!(
            source.resolve_link("https://elsewhere.example/a"),
            Some("https://elsewhere.example/a".to_string())
        );
        assert_eq!(source.resolve_link(""), None);
        assert_eq!(source.resolve_link("   "), None);
    }
}
