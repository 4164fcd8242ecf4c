//! Message processing pipeline — the main handle_message flow.

use super::classify::{classify, Classification};
use super::{Gateway, ATTACHMENT_FILENAME, FAILURE_REPLY, SECONDARY_REPLY};
use mimus_core::{
    message::{IncomingMessage, MessageMetadata, OutgoingMessage},
    reply::ReplyOutcome,
    sanitize,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};

impl Gateway {
    /// Process a single incoming message through the full pipeline.
    pub(super) async fn handle_message(&self, incoming: IncomingMessage) {
        // Every inbound message content is logged, whatever the outcome.
        info!(
            "[{}] {} says: {}",
            incoming.channel,
            incoming.sender_name.as_deref().unwrap_or("unknown"),
            incoming.text
        );

        match classify(&incoming, &self.identity.id) {
            Classification::Ignored => {
                debug!("[{}] message {} ignored", incoming.channel, incoming.id);
            }
            Classification::Secondary => {
                self.send_text(&incoming, SECONDARY_REPLY).await;
            }
            Classification::Primary => {
                self.run_inference(&incoming).await;
            }
        }
    }

    /// Sanitize, infer, and deliver the result inline or as an attachment.
    async fn run_inference(&self, incoming: &IncomingMessage) {
        let cleaned = sanitize::sanitize(&incoming.text, &self.identity.name);

        let start = Instant::now();
        let result = match self.worker.submit(incoming.id, cleaned).await {
            Ok(result) => result,
            Err(e) => {
                error!("inference failed for message {}: {e}", incoming.id);
                self.send_text(incoming, FAILURE_REPLY).await;
                return;
            }
        };
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match ReplyOutcome::decide(&result, self.message_limit, self.artifacts.path(incoming.id)) {
            ReplyOutcome::Inline(text) => {
                let msg = OutgoingMessage {
                    text,
                    metadata: MessageMetadata {
                        engine_used: self.engine_name.clone(),
                        processing_time_ms: elapsed_ms,
                        model: None,
                    },
                    reply_target: incoming.reply_target.clone(),
                    reply_to: incoming.reply_to.clone(),
                };
                if let Some(channel) = self.channels.get(&incoming.channel) {
                    if let Err(e) = channel.send(msg).await {
                        error!("failed to send reply: {e}");
                    }
                }
            }
            ReplyOutcome::Attachment { path, notice } => {
                let Some(target) = incoming.reply_target.as_deref() else {
                    warn!("no reply target for oversized result {}", incoming.id);
                    return;
                };
                let bytes = match tokio::fs::read(&path).await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        error!("failed to read artifact {}: {e}", path.display());
                        self.send_text(incoming, FAILURE_REPLY).await;
                        return;
                    }
                };
                if let Some(channel) = self.channels.get(&incoming.channel) {
                    if let Err(e) = channel
                        .send_document(
                            target,
                            incoming.reply_to.as_deref(),
                            &bytes,
                            ATTACHMENT_FILENAME,
                            &notice,
                        )
                        .await
                    {
                        error!("failed to send attachment: {e}");
                    }
                }
            }
        }
    }
}
