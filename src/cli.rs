//! Command-line interface definitions for the journal feed builder.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment variables.

use clap::Parser;

/// Channel link advertised in the feed document when no override is
/// configured. A stable identifier, not a fetchable page.
pub const DEFAULT_FEED_LINK: &str = "https://example.org/journal-feed";

/// Command-line arguments for the journal feed builder.
///
/// The configuration surface is deliberately small: where the feed document
/// goes and what channel link it advertises. Everything else (sources,
/// selectors, keyword lists) is compiled into the source registry.
///
/// # Examples
///
/// ```sh
/// # Write feed.xml to the working directory
/// journal_feed
///
/// # Custom output path and channel link
/// journal_feed -o /var/www/feed.xml --feed-link https://feeds.example.org/bio
///
/// # Channel link from the environment
/// FEED_LINK=https://feeds.example.org/bio journal_feed
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output path for the RSS feed document
    #[arg(short, long, default_value = "feed.xml")]
    pub output: String,

    /// Channel link advertised in the feed document
    #[arg(long, env = "FEED_LINK", default_value = DEFAULT_FEED_LINK)]
    pub feed_link: String,
}
