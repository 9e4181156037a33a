//! Chat-completions gateway client.
//!
//! Implements `PatternGenerator` by posting the system prompt and the
//! user's description to `{base_url}/chat/completions` with a bearer
//! credential, then validating the first choice's content as a pattern.

mod api;
mod client;
mod config;


pub use client::GatewayClient;
pub use config::{GatewayConfig, DEFAULT_BASE_URL};
