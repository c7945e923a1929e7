//! Demo content cache: a single slot holding the current import's demo record.
//!
//! The slot is opaque: `get` returns whatever JSON is stored, and callers
//! decide whether it is a usable record. Writes replace the whole slot; there
//! is no locking, so concurrent writers resolve as last-writer-wins.

mod file;
mod memory;

pub use file::FileDemoCache;
pub use memory::MemoryDemoCache;

use anyhow::Result;
use serde_json::Value;

use crate::record::{as_record, DemoRecord};

/// Single-slot store for the demo record of the import in progress.
pub trait DemoContentCache {
    /// Current slot contents, or `None` when nothing usable is stored.
    fn get(&self) -> Option<Value>;

    /// Replaces the slot with `record`.
    fn update(&self, record: &DemoRecord) -> Result<()>;
}

/// The cached record, if the slot holds a JSON object.
pub fn cached_record<C: DemoContentCache + ?Sized>(cache: &C) -> Option<DemoRecord> {
    cache.get().and_then(as_record)
}

/// One top-level field of the cached record.
///
/// `None` when the slot is empty, holds something other than an object, or
/// lacks `key`.
pub fn site_data<C: DemoContentCache + ?Sized>(cache: &C, key: &str) -> Option<Value> {
    cached_record(cache).and_then(|mut record| record.remove(key))
}
