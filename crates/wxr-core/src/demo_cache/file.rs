//! Cache slot persisted as one JSON file under the XDG state dir.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::record::DemoRecord;

use super::DemoContentCache;

/// Demo record stored at a fixed path, e.g. `~/.local/state/wxr/demo_content.json`.
#[derive(Debug, Clone)]
pub struct FileDemoCache {
    path: PathBuf,
}

impl FileDemoCache {
    /// Default path for the cache file: `~/.local/state/wxr/demo_content.json`.
    pub fn default_path() -> Result<PathBuf> {
        Ok(crate::config::state_dir()?.join("demo_content.json"))
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::at(Self::default_path()?))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the slot. A missing file is `Ok(None)`; unreadable or invalid
    /// JSON is an error.
    pub fn load(&self) -> Result<Option<Value>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read demo cache: {}", self.path.display()))
            }
        };
        let value = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse demo cache: {}", self.path.display()))?;
        Ok(Some(value))
    }

    /// Writes the slot (creates the parent dir if needed).
    pub fn store(&self, record: &DemoRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(record).context("serialize demo record")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write demo cache: {}", self.path.display()))?;
        Ok(())
    }
}

impl DemoContentCache for FileDemoCache {
    fn get(&self) -> Option<Value> {
        match self.load() {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("ignoring unusable demo cache: {:#}", e);
                None
            }
        }
    }

    fn update(&self, record: &DemoRecord) -> Result<()> {
        self.store(record)
    }
}
