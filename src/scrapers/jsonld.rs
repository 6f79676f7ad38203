//! Embedded linked-data extraction.
//!
//! Layout-independent fallback strategy: instead of depending on a journal's
//! CSS classes, walk every `<script type="application/ld+json">` block on
//! the page and collect the schema.org entities inside. Publishers nest
//! entities behind `@graph` lists and `mainEntity` references, so collection
//! recurses through both; the classifier decides afterwards which collected
//! entities are actually articles.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;

use crate::models::{CandidateRecord, SkipReason};

static BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[type='application/ld+json']").unwrap());

/// Extract one candidate per linked-data entity found in `document`.
///
/// A block that fails to parse as JSON contributes a single
/// [`SkipReason::UnclassifiableBlock`] and extraction moves on to the next
/// block; one broken block never hides the rest of the page.
pub fn extract(document: &Html) -> Vec<Result<CandidateRecord, SkipReason>> {
    let mut candidates = Vec::new();
    for block in document.select(&BLOCK_SELECTOR) {
        let raw = block.text().collect::<String>();
        let content = raw
            .trim()
            .trim_start_matches("<![CDATA[")
            .trim_end_matches("]]>")
            .trim();
        match serde_json::from_str::<Value>(content) {
            Ok(value) => collect_entities(&value, &mut candidates),
            Err(err) => {
                debug!(error = %err, "skipping unreadable linked-data block");
                candidates.push(Err(SkipReason::UnclassifiableBlock));
            }
        }
    }
    candidates
}

/// Collect candidate entities from a parsed linked-data value.
///
/// An object is collected itself, then the elements of its `@graph` list and
/// its `mainEntity` value (single entity or list), recursively. A top-level
/// list contributes each element. Scalars inside containers are ignored.
fn collect_entities(value: &Value, out: &mut Vec<Result<CandidateRecord, SkipReason>>) {
    match value {
        Value::Object(entity) => {
            out.push(Ok(CandidateRecord::from_object(entity.clone())));
            if let Some(Value::Array(graph)) = entity.get("@graph") {
                for member in graph {
                    collect_entities(member, out);
                }
            }
            if let Some(main) = entity.get("mainEntity") {
                collect_entities(main, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_entities(item, out);
            }
        }
        _ => {}
    }
}
