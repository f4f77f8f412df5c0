//! Application Configuration
//!
//! Optional defaults stored in TOML format. Command-line flags always win
//! over values from the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// OCR settings
    pub ocr: OcrSettings,
    /// Output settings
    pub output: OutputSettings,
}

/// OCR engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    /// Tesseract language code (e.g. "eng", "deu", "eng+fra")
    pub language: String,
    /// Explicit tesseract binary; looked up on PATH when unset
    pub tesseract_path: Option<PathBuf>,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            tesseract_path: None,
        }
    }
}

/// JSON output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Location of the per-user config file, if the platform has one
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "examocr", "exam-ocr")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}
