use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Engine selection and per-engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which engine to use (currently only "ollama").
    #[serde(default = "default_engine")]
    pub default: String,
    pub ollama: Option<OllamaConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default: default_engine(),
            ollama: Some(OllamaConfig::default()),
        }
    }
}

/// Ollama engine config.
///
/// Sampling parameters are fixed for the process lifetime; they are sent
/// on every generate call but never varied per message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    #[serde(default = "default_ollama_base_url")]
    pub base_url: String,
    #[serde(default = "default_ollama_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_repeat_penalty")]
    pub repeat_penalty: f32,
    /// Number of trailing tokens considered for the repetition penalty.
    #[serde(default = "default_repeat_last_n")]
    pub repeat_last_n: u32,
    /// Maximum number of newly generated tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_threads")]
    pub threads: u32,
    /// Sampling seed for reproducible output. Unset = engine default.
    #[serde(default)]
    pub seed: Option<i64>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_ollama_base_url(),
            model: default_ollama_model(),
            temperature: default_temperature(),
            repeat_penalty: default_repeat_penalty(),
            repeat_last_n: default_repeat_last_n(),
            max_tokens: default_max_tokens(),
            threads: default_threads(),
            seed: None,
        }
    }
}
