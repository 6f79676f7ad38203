//! Article extraction from journal listing-page markup.
//!
//! Each source in the registry extracts candidates through one of two
//! strategies, chosen statically on its descriptor:
//!
//! | Source | Module | Strategy | Notes |
//! |--------|--------|----------|-------|
//! | Cell | [`cell`] | Card pattern | TOC items with labeled display dates |
//! | Nature | [`nature`] | Card pattern | ISO dates in `datetime` attributes |
//! | Science | [`science`] | Card pattern | Two card layouts on one page |
//! | (any) | [`jsonld`] | Embedded data | Layout-independent JSON-LD walk |
//!
//! [`cards`] holds the shared selector engine the per-journal patterns run
//! on. [`extract`] dispatches on the source's strategy and yields raw
//! candidates; [`extract_articles`] runs the whole per-source pipeline
//! (extract, classify, normalize the date, assemble), folding recoverable
//! skips into per-source counts instead of surfacing each one.
//!
//! Extraction is a pure transform over provided markup. Fetching, with its
//! retries and timeouts, lives in [`crate::fetch`].

use scraper::Html;
use thiserror::Error;
use tracing::{info, instrument};

use crate::assemble::{assemble, date_text};
use crate::classify::classify;
use crate::dates;
use crate::models::{Article, CandidateRecord, JournalSource, SkipReason, Strategy};

pub mod cards;
pub mod cell;
pub mod jsonld;
pub mod nature;
pub mod science;

/// Unrecoverable extraction failure: the whole listing was unusable.
///
/// Everything below whole-document granularity degrades to a
/// [`SkipReason`] instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The listing markup is empty or whitespace-only, the one shape the
    /// error-recovering HTML parser cannot extract anything from.
    #[error("listing markup for {0} is empty or unparseable")]
    MalformedInput(&'static str),
}

/// Extract candidate records from listing markup using the source's strategy.
///
/// The outer `Result` is the whole-document outcome; inner `Err` entries are
/// per-candidate skips the caller is expected to count and discard.
pub fn extract(
    markup: &str,
    source: &JournalSource,
) -> Result<Vec<Result<CandidateRecord, SkipReason>>, ExtractError> {
    if markup.trim().is_empty() {
        return Err(ExtractError::MalformedInput(source.name));
    }
    let document = Html::parse_document(markup);
    Ok(match source.strategy {
        Strategy::Cards(pattern) => cards::extract(&document, pattern, source),
        Strategy::JsonLd => jsonld::extract(&document),
    })
}

/// Run the full per-source pipeline over one listing page.
///
/// Folds extraction, classification, date normalization, and assembly into
/// the source's final article list. Recoverable failures (unreadable
/// embedded blocks, candidates without a title or link, rejected
/// classifications) are absorbed here and reported once as counts; a source
/// legitimately contributing zero articles is not an error.
#[instrument(level = "info", skip_all, fields(source = source.name))]
pub fn extract_articles(
    markup: &str,
    source: &JournalSource,
) -> Result<Vec<Article>, ExtractError> {
    let candidates = extract(markup, source)?;
    let total = candidates.len();

    let mut articles = Vec::new();
    let mut unreadable_blocks = 0usize;
    let mut incomplete = 0usize;
    let mut rejected = 0usize;
    for candidate in candidates {
        let candidate = match candidate {
            Ok(candidate) => candidate,
            Err(SkipReason::UnclassifiableBlock) => {
                unreadable_blocks += 1;
                continue;
            }
            Err(SkipReason::IncompleteCandidate) => {
                incomplete += 1;
                continue;
            }
        };
        if !classify(&candidate, source) {
            rejected += 1;
            continue;
        }
        let raw_date = date_text(&candidate, source);
        let published = dates::normalize(Some(&raw_date));
        match assemble(&candidate, true, published, source) {
            Some(article) => articles.push(article),
            None => incomplete += 1,
        }
    }

    info!(
        candidates = total,
        kept = articles.len(),
        rejected,
        incomplete,
        unreadable_blocks,
        "Extracted articles from listing"
    );
    Ok(articles)
}
