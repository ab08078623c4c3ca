//! # Dashboard
//! Trigger dispatch over the fetch → cache → extract → render pipeline.
//!
//! Each trigger replaces the single current view; there is no history.

use metrics::counter;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::cache::CacheStore;
use crate::extract::extract;
use crate::feed::types::FeedSource;
use crate::feed::{self, FetchOutcome};
use crate::render::{render_indexed, render_raw, render_summary};
use crate::summary::summarize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Fetch,
    ShowSummary,
    ShowRaw,
    Clear,
    /// Raw listing restricted to one magnitude type (summary row click).
    ShowMagType(String),
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Fetch => "fetch",
            Trigger::ShowSummary => "summary",
            Trigger::ShowRaw => "raw",
            Trigger::Clear => "clear",
            Trigger::ShowMagType(_) => "mag-type",
        }
    }
}

impl FromStr for Trigger {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fetch" => Ok(Trigger::Fetch),
            "summary" | "show-summary" => Ok(Trigger::ShowSummary),
            "raw" | "show-raw" | "original" => Ok(Trigger::ShowRaw),
            "clear" => Ok(Trigger::Clear),
            other => Err(anyhow::anyhow!("unknown trigger: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Empty,
    Status(String),
    RawTable(String),
    SummaryTable(String),
}

impl View {
    pub fn kind(&self) -> &'static str {
        match self {
            View::Empty => "empty",
            View::Status(_) => "status",
            View::RawTable(_) => "raw_table",
            View::SummaryTable(_) => "summary_table",
        }
    }

    /// Markup for the display region.
    pub fn html(&self) -> String {
        match self {
            View::Empty => String::new(),
            View::Status(msg) => format!(
                r#"<div class="status">{}</div>"#,
                html_escape::encode_text(msg)
            ),
            View::RawTable(m) | View::SummaryTable(m) => m.clone(),
        }
    }
}

pub const STATUS_CLEARED: &str = "Cache has been cleared.";

/// Owns the cache store, the feed source and the current-view slot.
#[derive(Clone)]
pub struct Dashboard {
    store: CacheStore,
    source: Arc<dyn FeedSource>,
    view: Arc<Mutex<View>>,
}

impl Dashboard {
    pub fn new(store: CacheStore, source: Arc<dyn FeedSource>) -> Self {
        Self {
            store,
            source,
            view: Arc::new(Mutex::new(View::Empty)),
        }
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    pub fn current_view(&self) -> View {
        self.view.lock().expect("view mutex poisoned").clone()
    }

    pub async fn dispatch(&self, trigger: Trigger) -> View {
        counter!("dashboard_triggers_total", "event" => trigger.as_str()).increment(1);
        tracing::debug!(target: "dashboard", event = trigger.as_str(), "trigger");

        let view = match trigger {
            Trigger::Fetch => {
                match feed::refresh(self.source.as_ref(), &self.store).await {
                    FetchOutcome::Stored { features } => View::Status(format!(
                        "Fetched {features} earthquakes and stored them in the cache."
                    )),
                    FetchOutcome::Failed { reason } => View::Status(format!(
                        "Fetch failed; cached data left unchanged. ({reason})"
                    )),
                }
            }
            Trigger::ShowSummary => {
                View::SummaryTable(render_summary(&summarize(&self.store.load())))
            }
            Trigger::ShowRaw => View::RawTable(render_raw(&extract(&self.store.load()))),
            Trigger::ShowMagType(code) => {
                let records = extract(&self.store.load());
                let matching: Vec<_> = records
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| r.mag_type == code)
                    .collect();
                if !records.is_empty() && matching.is_empty() {
                    View::Status(format!("No events with magType {code} in the cache."))
                } else {
                    View::RawTable(render_indexed(matching))
                }
            }
            Trigger::Clear => match self.store.clear() {
                Ok(()) => {
                    tracing::info!(target: "dashboard", "cache cleared");
                    View::Status(STATUS_CLEARED.to_string())
                }
                Err(e) => {
                    tracing::warn!(target: "dashboard", error = ?e, "cache clear failed");
                    View::Status("Clearing the cache failed.".to_string())
                }
            },
        };

        *self.view.lock().expect("view mutex poisoned") = view.clone();
        view
    }
}
