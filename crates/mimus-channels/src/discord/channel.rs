//! Channel trait implementation: gateway startup and outbound sends.

use super::handler::DiscordHandler;
use super::DiscordChannel;
use async_trait::async_trait;
use mimus_core::{
    error::MimusError,
    message::{IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use serenity::all::{
    ChannelId, Client, CreateAttachment, CreateMessage, GatewayIntents, MessageId,
    MessageReference,
};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Gateway intents needed to observe guild messages with content.
fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

fn parse_channel_id(target: &str) -> Result<ChannelId, MimusError> {
    let raw: u64 = target
        .parse()
        .map_err(|e| MimusError::Channel(format!("invalid discord channel id '{target}': {e}")))?;
    if raw == 0 {
        return Err(MimusError::Channel("invalid discord channel id '0'".into()));
    }
    Ok(ChannelId::new(raw))
}

fn parse_message_id(raw: &str) -> Result<MessageId, MimusError> {
    let id: u64 = raw
        .parse()
        .map_err(|e| MimusError::Channel(format!("invalid discord message id '{raw}': {e}")))?;
    if id == 0 {
        return Err(MimusError::Channel("invalid discord message id '0'".into()));
    }
    Ok(MessageId::new(id))
}

/// Thread the outgoing message as a reply to the triggering one, so the
/// response stays attributed to the requester in a busy channel.
fn with_reference(
    builder: CreateMessage,
    channel_id: ChannelId,
    reply_to: Option<&str>,
) -> Result<CreateMessage, MimusError> {
    match reply_to {
        Some(raw) => {
            let message_id = parse_message_id(raw)?;
            Ok(builder.reference_message(MessageReference::from((channel_id, message_id))))
        }
        None => Ok(builder),
    }
}

#[async_trait]
impl Channel for DiscordChannel {
    fn name(&self) -> &str {
        "discord"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, MimusError> {
        let (tx, rx) = mpsc::channel(64);

        let mut client = Client::builder(&self.config.bot_token, intents())
            .event_handler(DiscordHandler { tx })
            .await
            .map_err(|e| MimusError::Channel(format!("discord client build failed: {e}")))?;

        info!("Discord channel connecting to gateway...");

        tokio::spawn(async move {
            if let Err(e) = client.start().await {
                error!("discord client stopped: {e}");
            }
        });

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), MimusError> {
        let target = message
            .reply_target
            .as_deref()
            .ok_or_else(|| MimusError::Channel("no reply_target on outgoing message".into()))?;
        let channel_id = parse_channel_id(target)?;
        let builder = with_reference(
            CreateMessage::new().content(&message.text),
            channel_id,
            message.reply_to.as_deref(),
        )?;

        channel_id
            .send_message(&*self.http, builder)
            .await
            .map_err(|e| MimusError::Channel(format!("discord send failed: {e}")))?;
        Ok(())
    }

    async fn send_document(
        &self,
        target: &str,
        reply_to: Option<&str>,
        data: &[u8],
        filename: &str,
        notice: &str,
    ) -> Result<(), MimusError> {
        let channel_id = parse_channel_id(target)?;
        let attachment = CreateAttachment::bytes(data.to_vec(), filename.to_string());
        let builder = with_reference(
            CreateMessage::new().content(notice).add_file(attachment),
            channel_id,
            reply_to,
        )?;

        channel_id
            .send_message(&*self.http, builder)
            .await
            .map_err(|e| MimusError::Channel(format!("discord attachment send failed: {e}")))?;
        Ok(())
    }

    async fn stop(&self) -> Result<(), MimusError> {
        info!("Discord channel stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channel_id() {
        assert_eq!(parse_channel_id("111").unwrap(), ChannelId::new(111));
        assert!(parse_channel_id("0").is_err());
        assert!(parse_channel_id("not-a-number").is_err());
    }

    #[test]
    fn test_parse_message_id() {
        assert_eq!(parse_message_id("555").unwrap(), MessageId::new(555));
        assert!(parse_message_id("0").is_err());
        assert!(parse_message_id("").is_err());
    }

    #[test]
    fn test_with_reference_rejects_malformed_reply_id() {
        let builder = CreateMessage::new().content("hi");
        assert!(with_reference(builder, ChannelId::new(111), Some("bogus")).is_err());
    }

    #[test]
    fn test_with_reference_accepts_missing_reply_id() {
        let builder = CreateMessage::new().content("hi");
        assert!(with_reference(builder, ChannelId::new(111), None).is_ok());
    }
}
