//! Gateway — the event loop connecting channels to the inference worker.
//!
//! Classification runs concurrently per message; inference is serialized
//! through the single-slot worker.

mod classify;
mod pipeline;


use mimus_core::{
    message::{AgentIdentity, IncomingMessage, MessageMetadata, OutgoingMessage},
    traits::Channel,
};
use mimus_engines::{artifact::ArtifactStore, worker::InferenceHandle};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Canned reply when the agent is mentioned but not addressed first.
const SECONDARY_REPLY: &str = "You called?";

/// Notice sent when inference fails (the original design replied with
/// nothing; an explicit notice is friendlier to the requester).
const FAILURE_REPLY: &str = "Something went wrong while generating a reply. Please try again.";

/// Filename presented to the platform for oversized-result uploads.
const ATTACHMENT_FILENAME: &str = "inference.md";

/// The central gateway that routes messages between channels and the
/// inference worker.
pub struct Gateway {
    channels: HashMap<String, Arc<dyn Channel>>,
    identity: AgentIdentity,
    worker: InferenceHandle,
    artifacts: ArtifactStore,
    message_limit: usize,
    engine_name: String,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        channels: HashMap<String, Arc<dyn Channel>>,
        identity: AgentIdentity,
        worker: InferenceHandle,
        artifacts: ArtifactStore,
        message_limit: usize,
        engine_name: String,
    ) -> Self {
        Self {
            channels,
            identity,
            worker,
            artifacts,
            message_limit,
            engine_name,
        }
    }

    /// Run the main event loop.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "Mimus gateway running | engine: {} | channels: {} | agent: {} ({})",
            self.engine_name,
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
            self.identity.name,
            self.identity.id,
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        // Each message is handled on its own task so a long inference never
        // delays classification of newer messages.
        loop {
            tokio::select! {
                Some(incoming) = rx.recv() => {
                    let gw = self.clone();
                    tokio::spawn(async move {
                        gw.handle_message(incoming).await;
                    });
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("failed to stop channel {name}: {e}");
            }
        }
        info!("Shutdown complete.");
        Ok(())
    }

    /// Send a plain text message back to the sender.
    async fn send_text(&self, incoming: &IncomingMessage, text: &str) {
        let msg = OutgoingMessage {
            text: text.to_string(),
            metadata: MessageMetadata::default(),
            reply_target: incoming.reply_target.clone(),
            reply_to: incoming.reply_to.clone(),
        };

        if let Some(channel) = self.channels.get(&incoming.channel) {
            if let Err(e) = channel.send(msg).await {
                error!("failed to send message: {e}");
            }
        }
    }
}
