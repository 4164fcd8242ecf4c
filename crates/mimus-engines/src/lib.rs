//! # mimus-engines
//!
//! Inference engine implementations, the single-slot inference worker,
//! the prompt template, and the result artifact store.

pub mod artifact;
pub mod ollama;
pub mod prompt;
pub mod worker;
