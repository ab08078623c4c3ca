//! # Summarizer
//! Grouped occurrence counts keyed by magnitude type, in first-seen order.

use serde::Serialize;
use std::collections::HashMap;

use crate::extract::mag_type_of;
use crate::feed::types::FeedDocument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub mag_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CountSummary {
    rows: Vec<SummaryRow>,
    index: HashMap<String, usize>,
}

impl CountSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`; unseen keys start at zero.
    pub fn bump(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.rows[i].count += 1,
            None => {
                self.index.insert(key.to_string(), self.rows.len());
                self.rows.push(SummaryRow {
                    mag_type: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&i| self.rows[i].count)
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.mag_type.as_str())
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PartialEq for CountSummary {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl Eq for CountSummary {}

impl Serialize for CountSummary {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(s)
    }
}

pub fn summarize(doc: &FeedDocument) -> CountSummary {
    let mut out = CountSummary::new();
    for f in &doc.features {
        out.bump(mag_type_of(f));
    }
    out
}
