use feed_rs::parser;

use super::date::{format_iso, parse_timestamp};
use super::models::{FetchedFeed, RawEntry};
use crate::{Error, Result};

/// Wide enough that html2text never wraps a line inside a salary figure or keyword
const TEXT_WIDTH: usize = 10_000;

/// Parse RSS/Atom feed content into entries
pub fn parse_feed(content: &[u8]) -> Result<FetchedFeed> {
    let feed = parser::Builder::new()
        .timestamp_parser(parse_timestamp)
        .build()
        .parse(content)
        .map_err(|e| Error::FeedParse(e.to_string()))?;

    let title = feed.title.map(|t| t.content);

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| {
            let title = entry
                .title
                .map(|t| html_to_text(&t.content))
                .unwrap_or_default();

            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default();

            let summary = entry.summary.map(|s| html_to_text(&s.content));

            let description = entry
                .content
                .and_then(|c| c.body)
                .map(|body| html_to_text(&body));

            RawEntry {
                title,
                link,
                summary,
                description,
                published: entry.published.as_ref().map(format_iso),
                updated: entry.updated.as_ref().map(format_iso),
            }
        })
        .collect();

    Ok(FetchedFeed { title, entries })
}

/// Convert HTML content to plain text
fn html_to_text(html: &str) -> String {
    if !html.contains('<') && !html.contains('&') {
        return html.trim().to_string();
    }

    html2text::from_read(html.as_bytes(), TEXT_WIDTH)
        .map(|text| text.trim().to_string())
        .unwrap_or_else(|_| html.to_string())
}
