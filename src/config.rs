//! # Bot Configuration Module
//!
//! Runtime settings read from the process environment (a `.env` file is
//! loaded first by `main`). The token and the public webhook URL are
//! required; everything else has a default.

use std::net::{Ipv4Addr, SocketAddr};

use tracing::warn;
use url::Url;

use crate::config_errors::ConfigError;

pub const TOKEN_VAR: &str = "BOT_TOKEN";
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";
pub const PORT_VAR: &str = "PORT";
pub const SITE_URL_VAR: &str = "SITE_URL";
pub const SUPPORT_USERNAME_VAR: &str = "SUPPORT_USERNAME";

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SITE_URL: &str = "https://your-site.com";
pub const DEFAULT_SUPPORT_USERNAME: &str = "@your_username";

/// Base URL of the studio site, used to build course links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    base: Url,
}

impl SiteLinks {
    pub fn parse(base: &str) -> Result<Self, ConfigError> {
        let base = Url::parse(base).map_err(|e| ConfigError::InvalidSiteUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidSiteUrl(format!(
                "{base} cannot be used as a base URL"
            )));
        }
        Ok(Self { base })
    }

    /// Build the absolute URL of a page on the site
    pub fn link(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        // Validated in `parse`, so segments are always available
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(path);
        }
        url
    }
}

/// Settings the menu screens are rendered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSettings {
    /// Course site links
    pub site: SiteLinks,
    /// Contact shown on the help screen
    pub support_username: String,
}

/// Everything the bot needs to start
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token
    pub token: String,
    /// Full URL registered with Telegram: `<WEBHOOK_URL>/<token>`
    pub webhook_url: Url,
    /// Port the webhook listener binds on all interfaces
    pub port: u16,
    pub menu: MenuSettings,
}

impl BotConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let token = non_empty(TOKEN_VAR).ok_or(ConfigError::MissingToken)?;
        let webhook_base = non_empty(WEBHOOK_URL_VAR).ok_or(ConfigError::MissingWebhookUrl)?;
        let webhook_url = build_webhook_url(&webhook_base, &token)?;

        let port = match non_empty(PORT_VAR) {
            Some(raw) => parse_port(&raw),
            None => DEFAULT_PORT,
        };

        let site_url = non_empty(SITE_URL_VAR).unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let site = SiteLinks::parse(site_url.trim())?;

        let support_username = non_empty(SUPPORT_USERNAME_VAR)
            .unwrap_or_else(|| DEFAULT_SUPPORT_USERNAME.to_string());

        Ok(Self {
            token,
            webhook_url,
            port,
            menu: MenuSettings {
                site,
                support_username,
            },
        })
    }

    /// Address the webhook listener binds to
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Join the public base URL with the token path, avoiding a doubled slash
pub fn build_webhook_url(base: &str, token: &str) -> Result<Url, ConfigError> {
    let joined = format!("{}/{}", base.trim().trim_end_matches('/'), token);
    Url::parse(&joined).map_err(|e| ConfigError::InvalidWebhookUrl(e.to_string()))
}

fn parse_port(raw: &str) -> u16 {
    match raw.trim().parse::<u16>() {
        Ok(port) => port,
        Err(e) => {
            warn!(value = %raw, error = %e, default = DEFAULT_PORT, "PORT must be a number, using default");
            DEFAULT_PORT
        }
    }
}
