//! `wxr load <path>` – replace the cached record from a JSON file.

use anyhow::{Context, Result};
use std::path::Path;
use wxr_core::demo_cache::{DemoContentCache, FileDemoCache};
use wxr_core::record::{as_record, template_id, DemoRecord};

pub fn run_load(cache: &FileDemoCache, path: &Path) -> Result<()> {
    let record = read_record(path)?;
    cache.update(&record)?;
    println!("{}", cached_message(&record, cache));
    Ok(())
}

pub(crate) fn read_record(path: &Path) -> Result<DemoRecord> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read demo record: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse demo record JSON: {}", path.display()))?;
    as_record(value).ok_or_else(|| anyhow::anyhow!("{} does not hold a JSON object", path.display()))
}

pub(crate) fn cached_message(record: &DemoRecord, cache: &FileDemoCache) -> String {
    match template_id(record) {
        Some(id) => format!("Cached demo record for template {id} in {}.", cache.path().display()),
        None => format!("Cached demo record (no template id) in {}.", cache.path().display()),
    }
}
