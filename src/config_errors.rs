//! # Configuration Error Types Module
//!
//! Startup failures. Every variant is fatal: `main` propagates it and the
//! process exits before the webhook is registered.

/// Errors raised while loading the bot configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `BOT_TOKEN` is missing or empty
    MissingToken,
    /// `WEBHOOK_URL` is missing or empty
    MissingWebhookUrl,
    /// `WEBHOOK_URL` (joined with the token path) is not a valid URL
    InvalidWebhookUrl(String),
    /// `SITE_URL` is not a valid URL
    InvalidSiteUrl(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingToken => write!(f, "BOT_TOKEN is not set"),
            ConfigError::MissingWebhookUrl => {
                write!(f, "WEBHOOK_URL is not set, cannot run webhook")
            }
            ConfigError::InvalidWebhookUrl(msg) => write!(f, "Invalid WEBHOOK_URL: {msg}"),
            ConfigError::InvalidSiteUrl(msg) => write!(f, "Invalid SITE_URL: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
