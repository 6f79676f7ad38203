//! Candidate-to-article assembly.
//!
//! The last pure step of the per-source pipeline: take a candidate the
//! classifier accepted plus its normalized publication date, map the
//! strategy-specific fields onto the canonical [`Article`], and gate on the
//! two hard requirements, a non-empty title and a resolvable link.
//! Everything else is best-effort; a missing summary never rejects an
//! article.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::{Article, CandidateRecord, JournalSource, Strategy};

/// Keys probed for an embedded-data candidate's link, in priority order:
/// the entity's own URL, its canonical-page reference, then its external
/// identifier.
const LINK_KEYS: [&str; 3] = ["url", "mainEntityOfPage", "@id"];

/// Build the canonical article for an accepted candidate.
///
/// Returns `None` when the candidate was not accepted, when the title is
/// empty after trimming, or when no link can be resolved to absolute form.
pub fn assemble(
    candidate: &CandidateRecord,
    accepted: bool,
    published: Option<DateTime<Utc>>,
    source: &JournalSource,
) -> Option<Article> {
    if !accepted {
        return None;
    }

    let (title, link) = match source.strategy {
        Strategy::Cards(_) => (candidate.text("title"), candidate.text("link")),
        Strategy::JsonLd => (
            candidate.first_text(&["headline", "name"]),
            link_text(candidate),
        ),
    };

    let title = title.trim().to_string();
    if title.is_empty() {
        return None;
    }
    let link = source.resolve_link(&link)?;

    let summary = match source.strategy {
        Strategy::Cards(_) => candidate.text("summary"),
        Strategy::JsonLd => candidate.text("description"),
    };

    Some(Article {
        title,
        link,
        summary,
        published,
        source: source.name.to_string(),
    })
}

/// Raw publication-date text for a candidate, per the source's strategy.
///
/// Selector candidates carry the card's captured `date`; embedded
/// candidates carry the entity's `datePublished`.
pub fn date_text(candidate: &CandidateRecord, source: &JournalSource) -> String {
    match source.strategy {
        Strategy::Cards(_) => candidate.text("date"),
        Strategy::JsonLd => candidate.text("datePublished"),
    }
}

/// First usable link text among [`LINK_KEYS`], or `""`.
fn link_text(candidate: &CandidateRecord) -> String {
    LINK_KEYS
        .into_iter()
        .filter_map(|key| candidate.get(key))
        .find_map(link_from_value)
        .unwrap_or_default()
}

/// Pull a link out of a link-shaped value.
///
/// schema.org link properties come as plain strings, as objects carrying an
/// `@id` or `url` member, or as lists of either; the first usable element
/// wins. Flattening would smear object values together, so this walks the
/// raw shape instead.
fn link_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Object(map) => map
            .get("@id")
            .or_else(|| map.get("url"))
            .and_then(link_from_value),
        Value::Array(items) => items.iter().find_map(link_from_value),
        _ => None,
    }
}
