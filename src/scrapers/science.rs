//! Science research listing pattern.
//!
//! [Science](https://www.science.org/journal/science/research) mixes two
//! card layouts on the same page (`div.card-content` and `article.card-do`)
//! with different title markup, so the pattern carries both container
//! selectors and a prioritized title list. The contributor list stands in
//! for a summary; Science shows no abstract on the listing page.

use super::cards::CardPattern;

/// Card pattern for the Science research listing.
pub static PATTERN: CardPattern = CardPattern {
    cards: "div.card-content, article.card-do",
    titles: &["h3.article-title a", "div.card__title a"],
    summary: Some("ul.card-contribs"),
    date: Some("span.card-meta__item time"),
    kind: Some("span.card-meta__type"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::extract_articles;
    use crate::sources;
    use chrono::{TimeZone, Utc};
    use scraper::Selector;

    const LISTING: &str = r#"
        <html><body>
          <div class="card-content">
            <span class="card-meta__type">Research Article</span>
            <h3 class="article-title">
              <a href="/doi/10.1126/science.abc1234">Topological sound in a
                synthetic lattice</a>
            </h3>
            <ul class="card-contribs"><li>A. Mehta</li><li>J. Okafor</li></ul>
            <span class="card-meta__item">
              <time datetime="2024-03-05T14:00:00Z">5 Mar 2024</time>
            </span>
          </div>
          <article class="card-do">
            <span class="card-meta__type">Perspective</span>
            <div class="card__title">
              <a href="/doi/10.1126/science.xyz9876">Hearing topology</a>
            </div>
            <span class="card-meta__item">
              <time datetime="2024-03-05T14:00:00Z">5 Mar 2024</time>
            </span>
          </article>
        </body></html>"#;

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
    fn test_listing_rejects_perspective() {
        let source = sources::by_name("Science").unwrap();
        let articles = extract_articles(LISTING, source).unwrap();
        assert_eq!(articles.len(), 1);

        let article = &articles[0];
        assert_eq!(article.title, "Topological sound in a synthetic lattice");
        assert_eq!(
            article.link,
            "https://www.science.org/doi/10.1126/science.abc1234"
        );
        assert_eq!(article.summary, "A. Mehta J. Okafor");
        assert_eq!(
            article.published,
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 14, 0, 0).unwrap())
        );
        assert_eq!(article.source, "Science");
    }

    #[test]
    fn test_card_do_title_fallback_is_used() {
        // The second layout has no h3.article-title; the fallback selector
        // must still find the anchor so the card is extracted at all.
        let source = sources::by_name("Science").unwrap();
        let document = scraper::Html::parse_document(LISTING);
        let candidates = crate::scrapers::cards::extract(&document, &PATTERN, source);
        assert_eq!(candidates.len(), 2);
        let perspective = candidates[1].as_ref().unwrap();
        assert_eq!(perspective.text("title"), "Hearing topology");
        assert_eq!(
            perspective.text("link"),
            "https://www.science.org/doi/10.1126/science.xyz9876"
        );
    }
}
