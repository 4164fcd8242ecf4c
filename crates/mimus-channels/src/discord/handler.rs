//! Serenity event handler forwarding gateway events into the channel.

use super::mentions::{clean_content, mention_ids};
use mimus_core::message::IncomingMessage;
use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// Forwards every MESSAGE_CREATE into the gateway receiver.
///
/// Deliberately does no filtering — the dispatcher's classification rules
/// (including ignoring the bot's own messages) own that decision.
pub(super) struct DiscordHandler {
    pub(super) tx: mpsc::Sender<IncomingMessage>,
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            "Discord gateway ready as {} ({} guilds)",
            ready.user.name,
            ready.guilds.len()
        );
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        // Usernames, not server nicknames: the sanitizer later strips the
        // agent's username, so the substituted token must match it exactly.
        let names: HashMap<String, String> = msg
            .mentions
            .iter()
            .map(|u| (u.id.to_string(), u.name.clone()))
            .collect();

        let sender_name = msg
            .author
            .global_name
            .clone()
            .unwrap_or_else(|| msg.author.name.clone());

        let incoming = IncomingMessage {
            id: Uuid::new_v4(),
            channel: "discord".to_string(),
            sender_id: msg.author.id.to_string(),
            sender_name: Some(sender_name),
            text: clean_content(&msg.content, &names),
            mentions: mention_ids(&msg.content),
            timestamp: chrono::Utc::now(),
            reply_target: Some(msg.channel_id.to_string()),
            reply_to: Some(msg.id.to_string()),
        };

        if self.tx.send(incoming).await.is_err() {
            warn!("discord channel receiver dropped, discarding message");
        }
    }
}
