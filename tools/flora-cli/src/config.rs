//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`flora.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shop identity and contact channel.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Where the catalog JSON lives.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Where cart snapshots are kept.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Named cart profile; several carts can coexist in one data dir.
    #[serde(default = "default_profile")]
    pub profile: String,
}

/// Shop metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Shop display name.
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// WhatsApp number orders are dispatched to.
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            whatsapp: default_whatsapp(),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            shop: ShopConfig::default(),
            catalog_path: default_catalog_path(),
            data_dir: default_data_dir(),
            profile: default_profile(),
        }
    }
}

impl CliConfig {
    /// Load config from an explicit path, `./flora.toml`, or defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(Path::new(p)),
            None => {
                let default = Path::new("flora.toml");
                if default.exists() {
                    Self::from_path(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

fn default_shop_name() -> String {
    "Flora".to_string()
}

fn default_whatsapp() -> String {
    "5358702873".to_string()
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("demos/catalog.json")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".flora")
}

fn default_profile() -> String {
    "default".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.profile, "default");
        assert_eq!(config.shop.whatsapp, "5358702873");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [shop]
            name = "Ramos Isis"
            "#,
        )
        .unwrap();

        assert_eq!(config.shop.name, "Ramos Isis");
        assert_eq!(config.shop.whatsapp, "5358702873");
        assert_eq!(config.catalog_path, PathBuf::from("demos/catalog.json"));
    }
}
