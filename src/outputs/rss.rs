//! RSS 2.0 serialization of the aggregated feed.
//!
//! [`render`] is a pure transform from an [`AggregatedFeed`] to the feed
//! document text; [`write_feed`] adds the file write. Streaming the document
//! through [`quick_xml::Writer`] keeps escaping correct without templating.
//!
//! # Item Mapping
//!
//! One `<item>` per article:
//! - `title`: `"<source>: <title>"`
//! - `link` and permalink `guid`: the article link
//! - `description`: the listing summary (present even when empty)
//! - `pubDate`: RFC 2822 publication time, omitted for undated articles

use chrono::Utc;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

use crate::models::AggregatedFeed;

const CHANNEL_TITLE: &str = "Custom Biological Research Feed";
const CHANNEL_DESCRIPTION: &str = "Aggregated research articles from Cell, Nature, and Science.";
const CHANNEL_LANGUAGE: &str = "en-US";

/// Render the aggregated feed as an RSS 2.0 document.
///
/// `channel_link` is the configured channel-level link; item links come from
/// the articles themselves.
pub fn render(feed: &AggregatedFeed, channel_link: &str) -> Result<String, Box<dyn Error>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut rss_start = BytesStart::new("rss");
    rss_start.push_attribute(("version", "2.0"));
    writer.write_event(Event::Start(rss_start))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", CHANNEL_TITLE)?;
    write_text_element(&mut writer, "link", channel_link)?;
    write_text_element(&mut writer, "description", CHANNEL_DESCRIPTION)?;
    write_text_element(&mut writer, "language", CHANNEL_LANGUAGE)?;
    write_text_element(&mut writer, "lastBuildDate", &Utc::now().to_rfc2822())?;

    for article in &feed.articles {
        writer.write_event(Event::Start(BytesStart::new("item")))?;
        let title = format!("{}: {}", article.source, article.title);
        write_text_element(&mut writer, "title", &title)?;
        write_text_element(&mut writer, "link", &article.link)?;
        write_text_element(&mut writer, "description", &article.summary)?;

        let mut guid = BytesStart::new("guid");
        guid.push_attribute(("isPermaLink", "true"));
        writer.write_event(Event::Start(guid))?;
        writer.write_event(Event::Text(BytesText::new(&article.link)))?;
        writer.write_event(Event::End(BytesEnd::new("guid")))?;

        if let Some(published) = article.published {
            write_text_element(&mut writer, "pubDate", &published.to_rfc2822())?;
        }
        writer.write_event(Event::End(BytesEnd::new("item")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Write one text-content element; the writer escapes XML-significant
/// characters on the way out.
fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), Box<dyn Error>> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Render the feed and write it to `path`.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_feed(
    feed: &AggregatedFeed,
    channel_link: &str,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let document = render(feed, channel_link)?;
    if let Err(e) = fs::write(path, &document).await {
        error!(path = %path, error = %e, "Failed writing RSS feed");
        return Err(e.into());
    }
    info!(path = %path, items = feed.len(), "Wrote RSS feed");
    Ok(())
}
