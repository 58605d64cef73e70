use super::keymap::KeyConfig;
use crate::palette::CaseMatching;
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `~/.config/bitbar`, when a home directory can be resolved.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("bitbar");
        path
    })
}

#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    // Modal size as a percentage of the terminal
    pub width: u16,
    pub height: u16,
    pub case: CaseMatching,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 50,
            case: CaseMatching::Smart,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| config_dir().map(|dir| dir.join("bitbar.log")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: PaletteType,
    // Processor catalog JSON; the built-in catalog is used when unset
    pub catalog: Option<PathBuf>,
    pub palette: PaletteConfig,
    pub keys: KeyConfig,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: PaletteType::CatppuccinMocha,
            catalog: None,
            palette: PaletteConfig::default(),
            keys: KeyConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Reads a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.palette.width = config.palette.width.clamp(10, 100);
        config.palette.height = config.palette.height.clamp(10, 100);
        Ok(config)
    }
}
