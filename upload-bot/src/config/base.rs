//! Base config: Telegram connection and logging. Loaded from env.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use std::env;

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN, TELEGRAM_API_URL / TELOXIDE_API_URL
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/upload-bot.log".to_string());
        Ok(Self { telegram, log_file })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }
}
