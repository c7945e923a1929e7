//! `wxr resolve` – enrich the cached record with its WXR URL.

use anyhow::Result;
use wxr_core::config::TemplateVariant;
use wxr_core::demo_cache::DemoContentCache;
use wxr_core::remote::DemoFetcher;
use wxr_core::wxr::{WxrImporter, WxrSource};

pub fn run_resolve<C, F>(cache: &C, fetcher: &F, template_type: TemplateVariant, json: bool) -> Result<()>
where
    C: DemoContentCache + ?Sized,
    F: DemoFetcher + ?Sized,
{
    let importer = WxrImporter::new(cache, fetcher, template_type);
    let resolution = importer.resolve_cached();

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution.record)?);
        return Ok(());
    }

    match &resolution.found {
        Some(found) => {
            let from = match found.source {
                WxrSource::Explicit => "record",
                WxrSource::Nested => "nested field",
                WxrSource::Refetched => "catalog refetch",
            };
            println!("{}  (from {})", found.url, from);
        }
        None if template_type == TemplateVariant::Ai => {
            println!("Template type is ai; no WXR step.");
        }
        None if resolution.record.is_empty() => println!("No demo record cached."),
        None => println!("No WXR URL available; import proceeds without the WXR step."),
    }
    Ok(())
}
