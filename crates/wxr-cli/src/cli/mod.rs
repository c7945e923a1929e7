//! CLI for the WXR import path resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use wxr_core::config;
use wxr_core::demo_cache::FileDemoCache;
use wxr_core::remote::CatalogFetcher;

use commands::{run_fetch, run_load, run_normalize, run_resolve, run_show, run_variant};

/// Top-level CLI for the WXR resolver.
#[derive(Debug, Parser)]
#[command(name = "wxr")]
#[command(about = "Resolve the WXR import file for a cached starter template", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve the WXR URL of the cached demo record (refetching it once if needed).
    Resolve {
        /// Print the whole enriched record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the cached demo record, or one top-level field of it.
    Show {
        /// Field name (e.g. "title" or "astra-site-wxr-path").
        key: Option<String>,
    },

    /// Replace the cached demo record with the JSON object in a file.
    Load {
        /// Path to a JSON file holding one demo record.
        path: String,
    },

    /// Fetch a demo record from the catalog by template id and cache it.
    Fetch {
        /// Catalog template identifier.
        id: u64,
    },

    /// Normalize a candidate WXR URL and print the result.
    Normalize {
        /// Raw value (may be protocol-relative or HTML-entity encoded).
        value: String,
    },

    /// Show or set the template type of the current import.
    Variant {
        /// New value: "classic" or "ai".
        value: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { json } => {
                let cache = FileDemoCache::open_default()?;
                let fetcher = CatalogFetcher::from_config(&cfg.catalog);
                run_resolve(&cache, &fetcher, cfg.template_type, json)?;
            }
            CliCommand::Show { key } => {
                let cache = FileDemoCache::open_default()?;
                run_show(&cache, key.as_deref())?;
            }
            CliCommand::Load { path } => {
                let cache = FileDemoCache::open_default()?;
                run_load(&cache, Path::new(&path))?;
            }
            CliCommand::Fetch { id } => {
                let cache = FileDemoCache::open_default()?;
                let fetcher = CatalogFetcher::from_config(&cfg.catalog);
                run_fetch(&cache, &fetcher, id)?;
            }
            CliCommand::Normalize { value } => run_normalize(&value),
            CliCommand::Variant { value } => run_variant(&cfg, value.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
