//! Nature research-articles listing pattern.
//!
//! [Nature](https://www.nature.com/nature/research-articles) lists articles
//! as `article.c-card` blocks. Dates come from a `<time>` element whose
//! `datetime` attribute carries a machine-readable ISO date, so that
//! attribute is preferred over the display text.

use super::cards::CardPattern;

/// Card pattern for the Nature research-articles listing.
pub static PATTERN: CardPattern = CardPattern {
    cards: "article.c-card",
    titles: &["h3.c-card__title a"],
    summary: Some(r#"div[data-test="article-description"] p"#),
    date: Some(r#"time[itemprop="datePublished"]"#),
    kind: Some("span.c-meta__type"),
};
