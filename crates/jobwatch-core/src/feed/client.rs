use super::models::FetchedFeed;
use crate::Result;

/// Source of parsed feeds, the network seam of the pipeline
#[async_trait::async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetch and parse the feed at `url`
    async fn fetch(&self, url: &str) -> Result<FetchedFeed>;

    /// Best-effort fetch: any failure is logged and yields an empty feed
    async fn fetch_entries(&self, url: &str) -> FetchedFeed {
        match self.fetch(url).await {
            Ok(feed) => {
                tracing::info!("Feed '{}': {} entries", url, feed.entries.len());
                feed
            }
            Err(e) => {
                tracing::warn!("Failed to fetch feed '{}': {}", url, e);
                FetchedFeed::empty()
            }
        }
    }
}
