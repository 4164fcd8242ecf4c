use crate::{
    error::MimusError,
    message::{IncomingMessage, OutgoingMessage},
};
use async_trait::async_trait;

/// Inference engine trait — the brain.
///
/// The engine is an opaque `text -> text` function configured once at
/// startup with a fixed parameter set.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Human-readable engine name.
    fn name(&self) -> &str;

    /// Generate a completion for an already-wrapped prompt.
    async fn generate(&self, prompt: &str) -> Result<String, MimusError>;

    /// Check if the engine is available and ready.
    async fn is_available(&self) -> bool;
}

/// Messaging Channel trait — the event source.
///
/// Every messaging platform implements this trait to receive and send
/// messages. The channel does no classification; every inbound message is
/// forwarded as-is.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, MimusError>;

    /// Send a text response back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), MimusError>;

    /// Send a file payload with an accompanying notice text, threaded as a
    /// reply to `reply_to` when the platform supports it.
    async fn send_document(
        &self,
        target: &str,
        reply_to: Option<&str>,
        data: &[u8],
        filename: &str,
        notice: &str,
    ) -> Result<(), MimusError>;

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), MimusError>;
}
