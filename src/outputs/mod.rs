//! Output generation for the aggregated feed.
//!
//! One output format today: [`rss`] renders the deduplicated article list as
//! an RSS 2.0 document and writes it to disk. The pipeline stays ignorant of
//! serialization details; everything it hands over is already ordered and
//! deduplicated.

pub mod rss;
