//! # mimus-core
//!
//! Core types, traits, configuration, and error handling for the Mimus bridge.

pub mod config;
pub mod error;
pub mod message;
pub mod reply;
pub mod sanitize;
pub mod traits;
