use thiserror::Error;

/// Top-level error type for Mimus.
#[derive(Debug, Error)]
pub enum MimusError {
    /// Error from an inference engine.
    #[error("engine error: {0}")]
    Engine(String),

    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Artifact store error.
    #[error("artifact error: {0}")]
    Artifact(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
