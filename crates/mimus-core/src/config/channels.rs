use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    pub discord: Option<DiscordConfig>,
}

/// Discord bot config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub bot_token: String,
    /// Platform-imposed inline message ceiling, in characters. Results
    /// above this are delivered as a file attachment.
    #[serde(default = "default_message_limit")]
    pub message_limit: usize,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bot_token: String::new(),
            message_limit: default_message_limit(),
        }
    }
}
