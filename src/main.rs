//! # Journal Feed
//!
//! An aggregation pipeline that scrapes newly published research articles
//! from scholarly journal listing pages, filters out non-article entries,
//! normalizes their publication dates, and emits a single deduplicated
//! RSS 2.0 feed ordered by recency.
//!
//! ## Features
//!
//! - Scrapes listing pages from multiple journals (Cell, Nature, and Science)
//! - Supports per-journal card patterns and a layout-independent JSON-LD
//!   extraction strategy
//! - Classifies candidates with per-source include/exclude keyword lists
//! - Reconciles inconsistent date encodings into UTC timestamps
//! - Deduplicates by article link and orders most-recent-first
//!
//! ## Usage
//!
//! ```sh
//! journal_feed -o ./feed.xml
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Fetching**: Download each registered journal's listing page
//!    (concurrent, with transient-error backoff)
//! 2. **Extraction**: Produce candidate records using the source's strategy
//! 3. **Classification & assembly**: Keep genuine research articles and
//!    build canonical records with normalized dates
//! 4. **Aggregation**: Merge, deduplicate by link, order by recency
//! 5. **Output**: Write the RSS 2.0 feed document

use clap::Parser;
use futures::future::join_all;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod assemble;
mod classify;
mod cli;
mod dates;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod sources;

use cli::Cli;
use fetch::{FetchPage, HttpFetcher, RetryFetch};
use models::{Article, JournalSource};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("journal_feed starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.output, ?args.feed_link, "Parsed CLI arguments");

    let fetcher = RetryFetch::new(HttpFetcher::new()?, 5, Duration::from_secs(1));

    // ---- Fetch and extract all sources ----
    // Sources run concurrently but join_all collects in registry order, so
    // aggregation input is deterministic no matter which fetch finishes
    // first.
    let per_source = join_all(
        sources::REGISTRY
            .iter()
            .map(|source| collect_articles(&fetcher, source)),
    )
    .await;

    for (source, articles) in sources::REGISTRY.iter().zip(&per_source) {
        info!(source = source.name, count = articles.len(), "Source processed");
    }

    let feed = aggregate::aggregate(per_source);
    info!(count = feed.len(), "Aggregated deduplicated feed");

    outputs::rss::write_feed(&feed, &args.feed_link, &args.output).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Fetch one journal's listing page and run the extraction pipeline over it.
///
/// A failed source contributes zero articles: the error is logged and the
/// run proceeds with the remaining sources, so one journal's outage never
/// takes down the whole feed.
#[instrument(level = "info", skip_all, fields(source = source.name))]
async fn collect_articles(
    fetcher: &RetryFetch<HttpFetcher>,
    source: &'static JournalSource,
) -> Vec<Article> {
    let markup = match fetcher.fetch(source.url).await {
        Ok(markup) => markup,
        Err(e) => {
            warn!(error = %e, "Fetch failed; source contributes no articles");
            return Vec::new();
        }
    };
    match scrapers::extract_articles(&markup, source) {
        Ok(articles) => articles,
        Err(e) => {
            warn!(error = %e, "Extraction failed; source contributes no articles");
            Vec::new()
        }
    }
}
