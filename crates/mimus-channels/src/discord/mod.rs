//! Discord channel.
//!
//! Uses the serenity gateway for inbound events and the HTTP API for
//! replies. The channel forwards every message; addressing decisions
//! belong to the dispatcher.

mod channel;
mod handler;
pub(crate) mod mentions;

use mimus_core::{config::DiscordConfig, error::MimusError, message::AgentIdentity};
use serenity::all::Http;
use std::sync::Arc;

/// Discord channel using the serenity gateway.
pub struct DiscordChannel {
    config: DiscordConfig,
    http: Arc<Http>,
}

impl DiscordChannel {
    /// Create a new Discord channel from config.
    pub fn new(config: DiscordConfig) -> Self {
        let http = Arc::new(Http::new(&config.bot_token));
        Self { config, http }
    }

    /// Resolve the bot's own identity via `users/@me`.
    ///
    /// Called once at startup; the identity is immutable afterwards.
    pub async fn resolve_identity(&self) -> Result<AgentIdentity, MimusError> {
        let user = self
            .http
            .get_current_user()
            .await
            .map_err(|e| MimusError::Channel(format!("discord users/@me failed: {e}")))?;
        Ok(AgentIdentity {
            id: user.id.to_string(),
            name: user.name.clone(),
        })
    }
}
