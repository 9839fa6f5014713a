//! BotConfig: BaseConfig + UploadSettings + command prefix. Use load() for env-based loading.

use anyhow::Result;
use std::env;

use super::{BaseConfig, UploadSettings};

/// Bot config. Use BotConfig::load() for env-based loading, then validate() before startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub upload: UploadSettings,
    /// COMMAND_PREFIX, default `/`.
    pub command_prefix: String,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let upload = UploadSettings::from_env()?;
        let command_prefix = env::var("COMMAND_PREFIX")
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "/".to_string());
        Ok(Self {
            base,
            upload,
            command_prefix,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.upload.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.base.telegram.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram.telegram_api_url.as_deref()
    }
}
