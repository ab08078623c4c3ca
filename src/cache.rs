//! # Cache Store
//! Single-file JSON persistence for the last successfully fetched feed.
//!
//! `load` never fails: a missing file is an empty document, and so is an
//! unreadable one (with a warning). Writes overwrite the whole file and are
//! not atomic.

use anyhow::{Context, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::feed::types::FeedDocument;

pub const DEFAULT_CACHE_PATH: &str = "cache/earthquakes.json";

#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the cache with `doc`, creating the parent directory if needed.
    pub fn save(&self, doc: &FeedDocument) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating cache dir {}", dir.display()))?;
        }
        let bytes = serde_json::to_vec(doc).context("serializing feed document")?;
        fs::write(&self.path, bytes)
            .with_context(|| format!("writing cache to {}", self.path.display()))?;
        Ok(())
    }

    /// Read the cached document, or an empty one if there is nothing usable.
    pub fn load(&self) -> FeedDocument {
        match self.try_load() {
            Ok(Some(doc)) => doc,
            Ok(None) => FeedDocument::empty(),
            Err(e) => {
                tracing::warn!(target: "cache", error = ?e, "cache unreadable; treating as empty");
                FeedDocument::empty()
            }
        }
    }

    fn try_load(&self) -> Result<Option<FeedDocument>> {
        let data = match fs::read(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let doc = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(doc))
    }

    /// Drop the cached document. Clearing an absent cache is a no-op.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path.display())),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_PATH)
    }
}
