//! Minimal transport config: token and optional API URL.
//! Loaded from environment variables BOT_TOKEN and TELEGRAM_API_URL / TELOXIDE_API_URL.

use anyhow::Result;
use dbot_core::DbotError;
use std::env;

/// Telegram connection settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. BOT_TOKEN is required unless `token` is given; the API URL is optional.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| DbotError::MissingConfiguration("BOT_TOKEN".to_string()))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds with the given token and the default API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Fails when the API URL is set but does not parse.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide client, pointed at the configured API URL when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
