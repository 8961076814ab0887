use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, Proxy};
use url::Url;

use super::client::FeedClient;
use super::models::FetchedFeed;
use super::parser::parse_feed;
use crate::config::SyncConfig;
use crate::{Error, Result};

const MAX_REDIRECTS: usize = 10;

/// Single-shot HTTP feed fetcher: no retries, no caching
pub struct FeedFetcher {
    client: Client,
    user_agent: String,
    max_feed_bytes: usize,
}

impl FeedFetcher {
    /// Create a new feed fetcher with configuration
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let client = Self::build_client(config.request_timeout_secs, &config.proxy_url)?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            max_feed_bytes: config.max_feed_bytes,
        })
    }

    /// Build HTTP client with optional proxy
    fn build_client(timeout_secs: u64, proxy_url: &Option<String>) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS));

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for feed fetching");
        }

        builder.build().map_err(Error::Http)
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "application/rss+xml,application/atom+xml,application/xml;q=0.9,text/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-GB,en;q=0.9"));
        if let Ok(ua) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, ua);
        }
        headers
    }

    /// Fetch raw feed bytes, failing on transport errors, non-2xx statuses and oversized bodies
    pub async fn fetch_raw(&self, url: &str) -> Result<Bytes> {
        let url = Url::parse(url.trim())?;

        let response = self
            .client
            .get(url.clone())
            .headers(self.build_headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FeedParse(format!("HTTP {} for URL: {}", status, url)));
        }

        if let Some(length) = response.content_length() {
            self.ensure_content_size(length, url.as_str())?;
        }

        let bytes = response.bytes().await?;
        self.ensure_content_size(bytes.len() as u64, url.as_str())?;

        if is_challenge_page(&bytes) {
            return Err(Error::FeedParse(format!(
                "Bot protection challenge page returned instead of a feed for URL: {}",
                url
            )));
        }

        Ok(bytes)
    }

    /// Fetch and parse a feed from URL
    pub async fn fetch(&self, url: &str) -> Result<FetchedFeed> {
        tracing::info!("Fetching feed from: {}", url);

        let content = self.fetch_raw(url).await?;
        parse_feed(&content)
    }

    fn ensure_content_size(&self, size: u64, url: &str) -> Result<()> {
        let limit = u64::try_from(self.max_feed_bytes).unwrap_or(u64::MAX);
        if size > limit {
            return Err(Error::FeedParse(format!(
                "Feed too large ({} bytes) for URL: {}",
                size, url
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FeedClient for FeedFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedFeed> {
        FeedFetcher::fetch(self, url).await
    }
}

/// Check the first 2KB for markers of a JavaScript challenge page
fn is_challenge_page(content: &[u8]) -> bool {
    let check_len = content.len().min(2048);
    let preview = String::from_utf8_lossy(&content[..check_len]);

    preview.contains("Just a moment...")
        || preview.contains("cf-browser-verification")
        || preview.contains("_cf_chl_opt")
        || preview.contains("challenge-platform")
}
