use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::qr::CorrectLevel;

/// QR section settings (optional `[qr]` table in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// Script loaded lazily to draw the code.
    pub script_path: String,
    /// Code width in pixels.
    pub width: u32,
    /// Code height in pixels.
    pub height: u32,
    /// Error-correction level: "L", "M", "Q" or "H".
    pub correct_level: CorrectLevel,
    /// Heading shown above the code.
    pub title: String,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            script_path: "/blocks/menutable/qrcode.min.js".to_string(),
            width: 90,
            height: 90,
            correct_level: CorrectLevel::H,
            title: "Order Online".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/menutable/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTableConfig {
    /// Width tier requested for item pictures.
    #[serde(default = "default_image_width")]
    pub image_width: u32,
    #[serde(default)]
    pub qr: QrConfig,
}

fn default_image_width() -> u32 {
    120
}

impl Default for MenuTableConfig {
    fn default() -> Self {
        Self {
            image_width: default_image_width(),
            qr: QrConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("menutable")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MenuTableConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<MenuTableConfig> {
    if !path.exists() {
        let default_cfg = MenuTableConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: MenuTableConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
