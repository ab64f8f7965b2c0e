use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Top-level capture configuration, loaded from vktrim.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default)]
    pub tracker: TrackerConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Maintain a single global ordered log of image-creation records.
    /// Needed when hardware replay is order-sensitive; off by default
    /// because the log grows for the lifetime of the capture session.
    #[serde(default)]
    pub ordered_image_creation: bool,
}

impl CaptureConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, StateError> {
        let content = std::fs::read_to_string(path)?;
        let config: CaptureConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from file if it exists, otherwise return defaults.
    pub fn load_or_default(path: &str) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

/// Returns the default config file path based on platform conventions.
/// Search order:
/// 1. System-wide config: `%PROGRAMDATA%\VkTrim\vktrim.toml` (Windows) or `/etc/vktrim/vktrim.toml` (Linux/macOS)
/// 2. Local fallback: `./vktrim.toml`
pub fn default_config_path() -> String {
    #[cfg(windows)]
    {
        let programdata = std::env::var("PROGRAMDATA")
            .unwrap_or_else(|_| r"C:\ProgramData".to_string());
        let system_path = format!(r"{}\VkTrim\vktrim.toml", programdata);
        if std::path::Path::new(&system_path).exists() {
            return system_path;
        }
    }
    #[cfg(not(windows))]
    {
        let system_path = "/etc/vktrim/vktrim.toml";
        if std::path::Path::new(system_path).exists() {
            return system_path.to_string();
        }
    }
    "vktrim.toml".to_string()
}
