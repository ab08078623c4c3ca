use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::histogram;

use crate::feed::types::{FeedDocument, FeedSource};

/// USGS summary feed for the past 30 days, all magnitudes.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";

/// Live feed over HTTP. One GET per call, transport defaults, no retries.
pub struct HttpFeedSource {
    url: String,
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<FeedDocument> {
        let t0 = std::time::Instant::now();
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("feed http get()")?
            .error_for_status()
            .context("feed non-2xx")?;
        let body = resp.text().await.context("feed http .text()")?;
        let doc = parse_document(&body)?;

        histogram!("feed_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
        Ok(doc)
    }

    fn name(&self) -> &'static str {
        "usgs-http"
    }
}

/// Serves a fixed JSON body. Used by tests and offline runs.
pub struct FixtureFeedSource {
    // Own the copy so callers don't need a 'static fixture.
    body: String,
}

impl FixtureFeedSource {
    pub fn from_fixture(s: &str) -> Self {
        Self {
            body: s.to_string(),
        }
    }
}

#[async_trait]
impl FeedSource for FixtureFeedSource {
    async fn fetch(&self) -> Result<FeedDocument> {
        parse_document(&self.body)
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

fn parse_document(body: &str) -> Result<FeedDocument> {
    serde_json::from_str(body).context("parsing feed json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_source_parses_body() {
        let src = FixtureFeedSource::from_fixture(r#"{"features":[{"id":"x","properties":{}}]}"#);
        let doc = src.fetch().await.unwrap();
        assert_eq!(doc.features.len(), 1);
        assert_eq!(src.name(), "fixture");
    }

    #[tokio::test]
    async fn fixture_source_rejects_garbage() {
        let src = FixtureFeedSource::from_fixture("<html>not json</html>");
        assert!(src.fetch().await.is_err());
    }
}
