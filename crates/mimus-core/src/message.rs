use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An incoming message from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel name (e.g. "discord").
    pub channel: String,
    /// Platform-specific user ID of the author.
    pub sender_id: String,
    /// Human-readable sender name.
    pub sender_name: Option<String>,
    /// Cleaned message text: mention tokens replaced with `@Name`.
    pub text: String,
    /// IDs of mentioned users, in order of appearance in the raw content.
    #[serde(default)]
    pub mentions: Vec<String>,
    pub timestamp: DateTime<Utc>,
    /// Platform-specific target for routing the response (e.g. Discord channel id).
    #[serde(default)]
    pub reply_target: Option<String>,
    /// Platform-specific id of this message, so responses can be threaded
    /// as replies to it.
    #[serde(default)]
    pub reply_to: Option<String>,
}

/// An outgoing message to send back through a channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    pub metadata: MessageMetadata,
    /// Platform-specific target for routing (e.g. Discord channel id).
    #[serde(default)]
    pub reply_target: Option<String>,
    /// Platform-specific id of the message being replied to.
    #[serde(default)]
    pub reply_to: Option<String>,
}

/// Metadata about how a message was generated.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageMetadata {
    /// Which engine produced this response.
    pub engine_used: String,
    /// Wall-clock processing time in milliseconds.
    pub processing_time_ms: u64,
    /// Model identifier (if applicable).
    pub model: Option<String>,
}

/// The running agent's own identity on the chat platform.
///
/// Resolved once at startup and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentIdentity {
    /// Platform-specific user ID of the agent.
    pub id: String,
    /// Display name, stripped from triggering text by the sanitizer.
    pub name: String,
}
