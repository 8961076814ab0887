mod client;
mod date;
mod fetcher;
mod models;
mod parser;

pub use client::FeedClient;
pub use date::{format_iso, parse_timestamp, parse_when};
pub use fetcher::FeedFetcher;
pub use models::{FetchedFeed, RawEntry};
pub use parser::parse_feed;
