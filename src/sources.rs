//! Static registry of scraped journal sources.
//!
//! The registry is the only configuration the pipeline carries: one
//! [`JournalSource`] per journal, constructed at compile time and passed by
//! reference everywhere. Nothing mutates it after startup. Adding a journal
//! means adding a descriptor here and, for selector sources, a card pattern
//! module under [`crate::scrapers`].
//!
//! Include and exclude terms are stored lowercase; the classifier lowercases
//! its projection and matches by substring, so casing here would silently
//! break matching.

use crate::models::{JournalSource, Strategy};
use crate::scrapers::{cell, nature, science};

/// Every journal the feed is built from, in processing order.
pub static REGISTRY: [JournalSource; 3] = [
    JournalSource {
        name: "Cell",
        url: "https://www.cell.com/cell/newarticles",
        base_url: "https://www.cell.com",
        include_terms: &["research article", "article"],
        exclude_terms: &[
            "news",
            "editorial",
            "briefing",
            "ahead of print",
            "perspective",
            "pre-proof",
        ],
        strategy: Strategy::Cards(&cell::PATTERN),
    },
    JournalSource {
        name: "Nature",
        url: "https://www.nature.com/nature/research-articles",
        base_url: "https://www.nature.com",
        include_terms: &["research article", "research"],
        exclude_terms: &["news & views"],
        strategy: Strategy::Cards(&nature::PATTERN),
    },
    JournalSource {
        name: "Science",
        url: "https://www.science.org/journal/science/research",
        base_url: "https://www.science.org",
        include_terms: &["research article", "research"],
        exclude_terms: &["perspective", "books", "policy forum", "letter", "news"],
        strategy: Strategy::Cards(&science::PATTERN),
    },
];

/// Look up a source descriptor by its unique name.
pub fn by_name(name: &str) -> Option<&'static JournalSource> {
    REGISTRY.iter().find(|source| source.name == name)
}
