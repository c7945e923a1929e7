//! In-process cache slot.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use serde_json::Value;

use crate::record::DemoRecord;

use super::DemoContentCache;

/// Cache slot kept in memory; counts writes.
#[derive(Debug, Default)]
pub struct MemoryDemoCache {
    slot: Mutex<Option<Value>>,
    writes: AtomicUsize,
}

impl MemoryDemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `value` (which need not be an object).
    pub fn with_value(value: Value) -> Self {
        Self {
            slot: Mutex::new(Some(value)),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of `update` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl DemoContentCache for MemoryDemoCache {
    fn get(&self) -> Option<Value> {
        self.slot.lock().ok()?.clone()
    }

    fn update(&self, record: &DemoRecord) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("demo cache lock poisoned"))?;
        *slot = Some(Value::Object(record.clone()));
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
