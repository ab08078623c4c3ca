// src/feed/mod.rs
pub mod source;
pub mod types;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use once_cell::sync::OnceCell;

use crate::cache::CacheStore;
use crate::feed::types::FeedSource;

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("feed_fetch_total", "Feed refresh attempts.");
        describe_counter!(
            "feed_fetch_errors_total",
            "Feed fetch/parse/store failures."
        );
        describe_gauge!(
            "feed_features_cached",
            "Features in the cache after the last successful refresh."
        );
        describe_histogram!("feed_fetch_ms", "Feed download + parse time in milliseconds.");
    });
}

/// Result of a refresh. Failures never escape as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Stored { features: usize },
    Failed { reason: String },
}

impl FetchOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, FetchOutcome::Stored { .. })
    }
}

/// Fetch once from `source` and persist into `store`.
///
/// The cache file is only written after the whole document parsed, so a
/// failed fetch leaves the previous cache exactly as it was.
pub async fn refresh(source: &dyn FeedSource, store: &CacheStore) -> FetchOutcome {
    ensure_metrics_described();
    counter!("feed_fetch_total").increment(1);

    let doc = match source.fetch().await {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(target: "feed", error = ?e, source = source.name(), "feed fetch failed");
            counter!("feed_fetch_errors_total").increment(1);
            return FetchOutcome::Failed {
                reason: format!("{e:#}"),
            };
        }
    };

    let features = doc.features.len();
    if let Err(e) = store.save(&doc) {
        tracing::warn!(target: "feed", error = ?e, path = %store.path().display(), "cache write failed");
        counter!("feed_fetch_errors_total").increment(1);
        return FetchOutcome::Failed {
            reason: format!("{e:#}"),
        };
    }

    gauge!("feed_features_cached").set(features as f64);
    tracing::info!(target: "feed", features, source = source.name(), "feed cached");
    FetchOutcome::Stored { features }
}
