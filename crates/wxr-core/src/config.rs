use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How the site being imported was generated.
///
/// `ai` sites are built without a WXR file, so WXR resolution is skipped for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    #[default]
    Classic,
    Ai,
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateVariant::Classic => write!(f, "classic"),
            TemplateVariant::Ai => write!(f, "ai"),
        }
    }
}

impl FromStr for TemplateVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(TemplateVariant::Classic),
            "ai" => Ok(TemplateVariant::Ai),
            other => anyhow::bail!("unknown template type {other:?} (expected classic or ai)"),
        }
    }
}

/// Catalog endpoint used to refetch a demo record (`[catalog]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Request URL with an `{id}` placeholder for the template id.
    pub url_template: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url_template: "https://websitedemos.net/wp-json/starter-templates/v1/sites/{id}"
                .to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/wxr/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WxrConfig {
    /// Variant of the template currently being imported.
    #[serde(default)]
    pub template_type: TemplateVariant,
    /// Catalog endpoint; built-in defaults when the section is missing.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Per-user state directory (`~/.local/state/wxr`) shared by the cache file and the log.
pub fn state_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wxr")?;
    Ok(xdg_dirs.get_state_home())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wxr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WxrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WxrConfig::default();
        save_to_path(&default_cfg, &path)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<WxrConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: WxrConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Write configuration to `path` (creates the parent dir if needed).
pub fn save_to_path(cfg: &WxrConfig, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}

/// Persist a new template type in the default config file.
pub fn set_template_type(template_type: TemplateVariant) -> Result<WxrConfig> {
    let mut cfg = load_or_init()?;
    cfg.template_type = template_type;
    save_to_path(&cfg, &config_path()?)?;
    Ok(cfg)
}
