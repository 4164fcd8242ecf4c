mod channels;
mod defaults;
mod engines;

#[cfg(test)]
mod tests;

pub use channels::*;
pub use engines::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::MimusError;
use defaults::*;

/// Top-level Mimus configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mimus: MimusConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// General agent settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MimusConfig {
    /// Agent display name, stripped from triggering text by the sanitizer.
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for MimusConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Expand `~` or a `~/` prefix to the home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') {
            if let Some(home) = std::env::var_os("HOME") {
                return format!("{}{rest}", home.to_string_lossy());
            }
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, MimusError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config {
            mimus: MimusConfig::default(),
            channel: ChannelConfig::default(),
            engine: EngineConfig::default(),
        });
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| MimusError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| MimusError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
