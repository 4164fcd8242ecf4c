//! Ollama local model engine.
//!
//! Connects to a locally running Ollama server via `/api/generate`.
//! No API key required. Sampling parameters come from config once at
//! startup and are never varied per call.

use async_trait::async_trait;
use mimus_core::{config::OllamaConfig, error::MimusError, traits::Engine};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Ollama engine backed by a local server.
pub struct OllamaEngine {
    client: reqwest::Client,
    base_url: String,
    model: String,
    options: GenerationOptions,
}

impl OllamaEngine {
    /// Create from config values.
    pub fn from_config(config: OllamaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
            model: config.model,
            options: GenerationOptions {
                temperature: config.temperature,
                repeat_penalty: config.repeat_penalty,
                repeat_last_n: config.repeat_last_n,
                num_predict: config.max_tokens,
                num_thread: config.threads,
                seed: config.seed,
            },
        }
    }
}

// --- Serde types ---

#[derive(Serialize, Clone)]
struct GenerationOptions {
    temperature: f32,
    repeat_penalty: f32,
    repeat_last_n: u32,
    num_predict: u32,
    num_thread: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerationOptions,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

#[async_trait]
impl Engine for OllamaEngine {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn generate(&self, prompt: &str) -> Result<String, MimusError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let body = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            options: self.options.clone(),
        };

        debug!("ollama: POST {url} model={}", self.model);

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MimusError::Engine(format!("ollama request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(MimusError::Engine(format!(
                "ollama returned {status}: {text}"
            )));
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| MimusError::Engine(format!("ollama: failed to parse response: {e}")))?;

        if let Some(ref m) = parsed.model {
            debug!("ollama: completion from model {m}");
        }

        parsed
            .response
            .ok_or_else(|| MimusError::Engine("ollama returned no response text".into()))
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url.trim_end_matches('/'));
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!("ollama not available: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> OllamaEngine {
        OllamaEngine::from_config(OllamaConfig::default())
    }

    #[test]
    fn test_engine_name() {
        assert_eq!(engine().name(), "ollama");
    }

    #[test]
    fn test_request_serialization() {
        let body = GenerateRequest {
            model: "llama3".into(),
            prompt: "### Instruction:\nhi\n\n### Response:\n".into(),
            stream: false,
            options: GenerationOptions {
                temperature: 0.2,
                repeat_penalty: 1.1,
                repeat_last_n: 64,
                num_predict: 2560,
                num_thread: 8,
                seed: None,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama3");
        assert!(!json["stream"].as_bool().unwrap());
        assert_eq!(json["options"]["num_predict"], 2560);
        assert_eq!(json["options"]["repeat_last_n"], 64);
        assert!(json["options"].get("seed").is_none());
    }

    #[test]
    fn test_request_serialization_with_seed() {
        let opts = GenerationOptions {
            temperature: 0.2,
            repeat_penalty: 1.1,
            repeat_last_n: 64,
            num_predict: 2560,
            num_thread: 8,
            seed: Some(7),
        };
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json["seed"], 7);
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"model":"llama3","response":"Why did...","done":true,"eval_count":42}"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response.as_deref(), Some("Why did..."));
        assert_eq!(resp.model, Some("llama3".into()));
    }

    #[test]
    fn test_response_parsing_without_text() {
        let json = r#"{"model":"llama3","done":true}"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(resp.response.is_none());
    }
}
