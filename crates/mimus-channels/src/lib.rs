//! # mimus-channels
//!
//! Messaging platform integrations for Mimus.

pub mod discord;
