//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "Mimus".to_string()
}

pub fn default_data_dir() -> String {
    "~/.mimus".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_engine() -> String {
    "ollama".to_string()
}

pub fn default_message_limit() -> usize {
    2000
}

pub fn default_ollama_base_url() -> String {
    "http://localhost:11434".to_string()
}

pub fn default_ollama_model() -> String {
    "llama3".to_string()
}

pub fn default_temperature() -> f32 {
    0.2
}

pub fn default_repeat_penalty() -> f32 {
    1.1
}

pub fn default_repeat_last_n() -> u32 {
    64
}

pub fn default_max_tokens() -> u32 {
    2560
}

pub fn default_threads() -> u32 {
    8
}
