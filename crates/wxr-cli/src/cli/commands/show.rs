//! `wxr show [key]` – print the cached record or one field.

use anyhow::Result;
use serde_json::Value;
use wxr_core::demo_cache::{self, DemoContentCache};

pub fn run_show<C: DemoContentCache + ?Sized>(cache: &C, key: Option<&str>) -> Result<()> {
    println!("{}", render_show(cache, key)?);
    Ok(())
}

/// Text printed by `wxr show`. A missing field renders as an empty line.
pub fn render_show<C: DemoContentCache + ?Sized>(cache: &C, key: Option<&str>) -> Result<String> {
    match key {
        None => match demo_cache::cached_record(cache) {
            Some(record) => Ok(serde_json::to_string_pretty(&record)?),
            None => Ok("No demo record cached.".to_string()),
        },
        Some(key) => match demo_cache::site_data(cache, key) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Ok(serde_json::to_string_pretty(&other)?),
            None => Ok(String::new()),
        },
    }
}
