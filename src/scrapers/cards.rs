//! Shared card-walking engine for selector-strategy sources.
//!
//! Journals with a stable listing layout are described by a [`CardPattern`]:
//! one selector for the repeating card container, a prioritized list of
//! title selectors, and optional selectors for the summary, date, and
//! type-label elements. The engine walks every card once and produces one
//! [`CandidateRecord`] per card under the selector-strategy keys (`title`,
//! `link`, `summary`, `date`, `kind`).
//!
//! Pattern selectors are compile-time constants; each source module carries
//! a test proving its selectors parse, so selector compilation here treats
//! failure as a programming error.

use scraper::{ElementRef, Html, Selector};

use crate::models::{CandidateRecord, JournalSource, SkipReason, collapse_whitespace};

/// Selector set describing one journal's listing layout.
#[derive(Debug)]
pub struct CardPattern {
    /// Selector (or comma list of selectors) matching each article card.
    pub cards: &'static str,
    /// Title selectors in priority order; the first that matches inside a
    /// card wins. The matched element must be the article anchor.
    pub titles: &'static [&'static str],
    /// Selector for the listing abstract or contributor line.
    pub summary: Option<&'static str>,
    /// Selector for the publication-date element. A `datetime` attribute on
    /// the matched element is preferred over its text.
    pub date: Option<&'static str>,
    /// Selector for the entry's type label ("Research Article", ...).
    pub kind: Option<&'static str>,
}

/// Walk every card in `document` and extract one candidate per card.
///
/// Cards without a title element, without an href on the title anchor, or
/// whose href cannot be resolved become [`SkipReason::IncompleteCandidate`]
/// entries; everything else degrades to empty-string fields.
pub fn extract(
    document: &Html,
    pattern: &CardPattern,
    source: &JournalSource,
) -> Vec<Result<CandidateRecord, SkipReason>> {
    let cards = Selector::parse(pattern.cards).unwrap();
    let titles: Vec<Selector> = pattern
        .titles
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect();
    let summary = pattern.summary.map(|s| Selector::parse(s).unwrap());
    let date = pattern.date.map(|s| Selector::parse(s).unwrap());
    let kind = pattern.kind.map(|s| Selector::parse(s).unwrap());

    let mut candidates = Vec::new();
    for card in document.select(&cards) {
        let Some(title_element) = first_match(&card, &titles) else {
            candidates.push(Err(SkipReason::IncompleteCandidate));
            continue;
        };
        let link = title_element
            .value()
            .attr("href")
            .and_then(|href| source.resolve_link(href));
        let Some(link) = link else {
            candidates.push(Err(SkipReason::IncompleteCandidate));
            continue;
        };

        let mut record = CandidateRecord::new();
        record.insert_text("title", element_text(&title_element));
        record.insert_text("link", link);
        record.insert_text("summary", optional_text(&card, summary.as_ref()));
        record.insert_text("date", date_capture(&card, date.as_ref()));
        record.insert_text("kind", optional_text(&card, kind.as_ref()));
        candidates.push(Ok(record));
    }
    candidates
}

/// First element matching any selector in priority order.
fn first_match<'a>(card: &ElementRef<'a>, selectors: &[Selector]) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .find_map(|selector| card.select(selector).next())
}

/// Collapsed text content of an element.
fn element_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

/// Text of the first match for an optional selector, or `""`.
fn optional_text(card: &ElementRef, selector: Option<&Selector>) -> String {
    selector
        .and_then(|s| card.select(s).next())
        .map(|element| element_text(&element))
        .unwrap_or_default()
}

/// Date capture: the matched element's `datetime` attribute when present
/// and non-empty, its text otherwise, `""` without a match.
fn date_capture(card: &ElementRef, selector: Option<&Selector>) -> String {
    let Some(element) = selector.and_then(|s| card.select(s).next()) else {
        return String::new();
    };
    match element.value().attr("datetime").map(str::trim) {
        Some(datetime) if !datetime.is_empty() => datetime.to_string(),
        _ => element_text(&element),
    }
}
