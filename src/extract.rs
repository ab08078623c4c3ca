//! # Record Extractor
//! Flattens raw feed features into display records.
//!
//! Pure and total: every absent field resolves through [`FIELD_DEFAULTS`],
//! output order matches feature order.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::feed::types::{FeedDocument, Feature};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Magnitude,
    Location,
    Time,
    Url,
    MagType,
}

/// Display value used when a feature lacks the field.
pub const FIELD_DEFAULTS: &[(Field, &str)] = &[
    (Field::Magnitude, "N/A"),
    (Field::Location, "Unknown"),
    (Field::Time, "N/A"),
    (Field::Url, "N/A"),
    (Field::MagType, "N/A"),
];

pub fn default_for(field: Field) -> &'static str {
    FIELD_DEFAULTS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, v)| *v)
        .unwrap_or("N/A")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    pub id: Option<String>,
    pub magnitude: String,
    pub location: String,
    pub time: String,
    pub url: String,
    pub mag_type: String,
}

pub fn extract(doc: &FeedDocument) -> Vec<NormalizedRecord> {
    doc.features.iter().map(normalize).collect()
}

pub fn normalize(feature: &Feature) -> NormalizedRecord {
    let p = &feature.properties;
    NormalizedRecord {
        id: feature.id.clone(),
        magnitude: p
            .mag
            .map(|m| m.to_string())
            .unwrap_or_else(|| default_for(Field::Magnitude).to_string()),
        location: or_default(p.place.as_deref(), Field::Location),
        time: p
            .time
            .and_then(format_time)
            .unwrap_or_else(|| default_for(Field::Time).to_string()),
        url: or_default(p.url.as_deref(), Field::Url),
        mag_type: mag_type_of(feature).to_string(),
    }
}

/// Magnitude-type key used by both the extractor and the summarizer.
///
/// A missing `magType` maps to the `"N/A"` default, so it shares a bucket
/// (and a drill-down) with any feed value that is literally `"N/A"`.
pub fn mag_type_of(feature: &Feature) -> &str {
    feature
        .properties
        .mag_type
        .as_deref()
        .unwrap_or_else(|| default_for(Field::MagType))
}

fn or_default(v: Option<&str>, field: Field) -> String {
    v.unwrap_or_else(|| default_for(field)).to_string()
}

/// Epoch millis → `YYYY-MM-DD HH:MM:SS UTC`; `None` when out of range.
fn format_time(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
