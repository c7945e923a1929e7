//! `wxr fetch <id>` – download a demo record from the catalog into the cache.

use anyhow::{Context, Result};
use wxr_core::demo_cache::{DemoContentCache, FileDemoCache};
use wxr_core::remote::DemoFetcher;

use super::load::cached_message;

pub fn run_fetch<F: DemoFetcher + ?Sized>(cache: &FileDemoCache, fetcher: &F, id: u64) -> Result<()> {
    let record = fetcher
        .fetch_by_id(id)
        .with_context(|| format!("fetch template {id}"))?;
    cache.update(&record)?;
    println!("{}", cached_message(&record, cache));
    Ok(())
}
