//! Process configuration: loaded once at startup, immutable afterwards.

use anyhow::{Context, Result};
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_WA_API_BASE: &str = "https://graph.facebook.com";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Shared secret echoed by Meta during the webhook verification handshake.
    pub verify_token: String,
    /// Bearer token for the Cloud API `/messages` endpoint.
    pub whatsapp_token: String,
    /// Numeric sender id the reply is issued from.
    pub phone_number_id: String,
    /// Gemini API key, sent as a query parameter.
    pub gemini_api_key: String,
    pub wa_api_base: String,
    pub gemini_api_base: String,
    pub bind: SocketAddr,
}

impl RelayConfig {
    /// Reads configuration from the environment. Secrets are required and
    /// never defaulted; endpoint bases and the bind address have defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind = get("BIND").unwrap_or_else(|| DEFAULT_BIND.into());
        Ok(Self {
            verify_token: require(&get, "VERIFY_TOKEN")?,
            whatsapp_token: require(&get, "WHATSAPP_TOKEN")?,
            phone_number_id: require(&get, "PHONE_NUMBER_ID")?,
            gemini_api_key: require(&get, "GEMINI_API_KEY")?,
            wa_api_base: get("WA_API_BASE").unwrap_or_else(|| DEFAULT_WA_API_BASE.into()),
            gemini_api_base: get("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.into()),
            bind: bind
                .parse()
                .with_context(|| format!("invalid BIND address {bind}"))?,
        })
    }
}

fn require(get: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    get(name)
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("{name} must be set"))
}
