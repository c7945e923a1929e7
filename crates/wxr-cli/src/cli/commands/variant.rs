//! `wxr variant [classic|ai]` – show or persist the template type.

use anyhow::Result;
use wxr_core::config::{self, TemplateVariant, WxrConfig};

pub fn run_variant(cfg: &WxrConfig, value: Option<&str>) -> Result<()> {
    match value {
        None => println!("{}", cfg.template_type),
        Some(v) => {
            let template_type: TemplateVariant = v.parse()?;
            let updated = config::set_template_type(template_type)?;
            tracing::info!("template type set to {}", updated.template_type);
            println!("{}", updated.template_type);
        }
    }
    Ok(())
}
