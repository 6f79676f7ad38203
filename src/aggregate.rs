//! Feed aggregation: merge per-source article lists into one ordered feed.
//!
//! Per-source lists arrive in registry order, get concatenated, stably
//! sorted by recency, and deduplicated by link in a single pass. The sort
//! runs before the dedup so that when the same link shows up from two
//! sources, the most recently dated instance is the one that survives.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use tracing::{info, instrument};

use crate::models::{AggregatedFeed, Article};

/// Merge per-source article lists into the final deduplicated feed.
///
/// Ordering is non-increasing by published time; undated articles sort last
/// and keep their concatenation order relative to each other (the sort is
/// stable). Duplicate links keep only the first instance of the sorted walk.
#[instrument(level = "info", skip_all)]
pub fn aggregate(lists: Vec<Vec<Article>>) -> AggregatedFeed {
    let mut articles: Vec<Article> = lists.into_iter().flatten().collect();
    let total = articles.len();

    articles.sort_by_key(|article| Reverse(sort_timestamp(article)));
    let articles: Vec<Article> = articles
        .into_iter()
        .unique_by(|article| article.link.clone())
        .collect();

    let undated = articles
        .iter()
        .filter(|article| article.published.is_none())
        .count();
    info!(
        total,
        unique = articles.len(),
        duplicates = total - articles.len(),
        undated,
        "Aggregated feed"
    );
    AggregatedFeed { articles }
}

/// Sort key for an article; undated articles take the earliest representable
/// timestamp so they land after every dated article in the descending sort.
fn sort_timestamp(article: &Article) -> DateTime<Utc> {
    article.published.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(link: &str, published: Option<DateTime<Utc>>, source: &str) -> Article {
        Article {
            title: format!("Title for {link}"),
            link: link.to_string(),
            summary: String::new(),
            published,
            source: source.to_string(),
        }
    }

    fn day(d: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_duplicate_links_keep_first_sorted_instance() {
        let newer = article("https://x/1", day(2), "Cell");
        let older = article("https://x/1", day(1), "Nature");
        let undated = article("https://x/2", None, "Nature");
        let feed = aggregate(vec![vec![newer.clone()], vec![older, undated.clone()]]);

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.articles[0], newer);
        assert_eq!(feed.articles[1], undated);
    }

    #[test]
    fn test_links_are_pairwise_distinct() {
        let feed = aggregate(vec![
            vec![article("https://x/1", day(3), "Cell")],
            vec![
                article("https://x/1", day(3), "Nature"),
                article("https://x/2", day(2), "Nature"),
            ],
            vec![article("https://x/2", None, "Science")],
        ]);
        let mut links: Vec<&str> = feed.articles.iter().map(|a| a.link.as_str()).collect();
        links.sort_unstable();
        links.dedup();
        assert_eq!(links.len(), feed.len());
    }

    #[test]
    fn test_recency_descending_with_undated_last() {
        let feed = aggregate(vec![vec![
            article("https://x/old", day(1), "Cell"),
            article("https://x/none", None, "Cell"),
            article("https://x/new", day(5), "Cell"),
            article("https://x/mid", day(3), "Cell"),
        ]]);
        let order: Vec<&str> = feed.articles.iter().map(|a| a.link.as_str()).collect();
        assert_eq!(
            order,
            ["https://x/new", "https://x/mid", "https://x/old", "https://x/none"]
        );
        for pair in feed.articles.windows(2) {
            if let (Some(a), Some(b)) = (pair[0].published, pair[1].published) {
                assert!(a >= b);
            }
            // Once dates run out they never reappear.
            assert!(!(pair[0].published.is_none() && pair[1].published.is_some()));
        }
    }

    #[test]
    fn test_undated_articles_keep_concatenation_order() {
        let feed = aggregate(vec![
            vec![article("https://cell/a", None, "Cell")],
            vec![article("https://nature/b", None, "Nature")],
            vec![article("https://science/c", None, "Science")],
        ]);
        let order: Vec<&str> = feed.articles.iter().map(|a| a.source.as_str()).collect();
        assert_eq!(order, ["Cell", "Nature", "Science"]);
    }

    #[test]
    fn test_ties_keep_concatenation_order() {
        let feed = aggregate(vec![
            vec![article("https://x/first", day(2), "Cell")],
            vec![article("https://x/second", day(2), "Nature")],
        ]);
        let order: Vec<&str> = feed.articles.iter().map(|a| a.link.as_str()).collect();
        assert_eq!(order, ["https://x/first", "https://x/second"]);
    }

    #[test]
    fn test_empty_input_yields_empty_feed() {
        let feed = aggregate(Vec::new());
        assert!(feed.is_empty());
        let feed = aggregate(vec![Vec::new(), Vec::new()]);
        assert_eq!(feed.len(), 0);
    }
}
