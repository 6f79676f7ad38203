//! Cell new-articles listing pattern.
//!
//! [Cell](https://www.cell.com/cell/newarticles) renders its listing as a
//! table-of-contents list: one `div.toc__item` per entry carrying the entry
//! type ("Research Article", "Editorial", ...), the linked title, a short
//! brief, and a labeled display date ("Published: March 3, 2024").

use super::cards::CardPattern;

/// Card pattern for the Cell new-articles listing.
pub static PATTERN: CardPattern = CardPattern {
    cards: "div.toc__item",
    titles: &["h3.toc__item__title a"],
    summary: Some("div.toc__item__brief"),
    date: Some("div.toc__item__date"),
    kind: Some("div.toc__item__type"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::extract_articles;
    use crate::sources;
    use chrono::{TimeZone, Utc};
    use scraper::Selector;

    const LISTING: &str = r#"
        <html><body><ul class="toc__body">
          <li><div class="toc__item">
            <div class="toc__item__type">Research Article</div>
            <h3 class="toc__item__title">
              <a href="/cell/fulltext/S0092-8674(24)00123-4">Spatially resolved
                multiomics of the mouse cortex</a>
            </h3>
            <div class="toc__item__brief">Single-cell profiling charts cortical
              cell types across development.</div>
            <div class="toc__item__date">Published: March 3, 2024</div>
          </div></li>
          <li><div class="toc__item">
            <div class="toc__item__type">Editorial</div>
            <h3 class="toc__item__title">
              <a href="/cell/fulltext/S0092-8674(24)00124-6">On reproducibility</a>
            </h3>
            <div class="toc__item__date">Published: March 3, 2024</div>
          </div></li>
        </ul></body></html>"#;

    #[test]
    fn test_pattern_selectors_parse() {
        assert!(Selector::parse(PATTERN.cards).is_ok());
        for title in PATTERN.titles {
            assert!(Selector::parse(title).is_ok());
        }
        for optional in [PATTERN.summary, PATTERN.date, PATTERN.kind].into_iter().flatten() {
            assert!(Selector::parse(optional).is_ok());
        }
    }

    #[test]
    fn test_listing_keeps_research_article_only() {
        let source = sources::by_name("Cell").unwrap();
        let articles = extract_articles(LISTING, source).unwrap();
        assert_eq!(articles.len(), 1);

        let article = &articles[0];
        assert_eq!(
            article.title,
            "Spatially resolved multiomics of the mouse cortex"
        );
        assert_eq!(
            article.link,
            "https://www.cell.com/cell/fulltext/S0092-8674(24)00123-4"
        );
        assert_eq!(
            article.summary,
            "Single-cell profiling charts cortical cell types across development."
        );
        assert_eq!(
            article.published,
            Some(Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap())
        );
        assert_eq!(article.source, "Cell");
    }
}
