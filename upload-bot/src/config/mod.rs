//! Bot configuration: BaseConfig (Telegram + log) + UploadSettings (batching policy) + command prefix.

mod base;
mod bot_config;
mod upload;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use upload::{
    parse_extensions, UploadSettings, DEFAULT_BATCH_DELAY, DEFAULT_BATCH_SIZE, DEFAULT_EXTENSIONS,
    MAX_BATCH_SIZE,
};
