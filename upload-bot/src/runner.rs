//! Entry points: the long-running command bot and the one-shot CLI upload.

use anyhow::Result;
use dbot_core::{init_tracing, Bot, Chat};
use dbot_telegram::{connect, run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::events::UploadBotEvents;
use crate::handlers::{LoggingHandler, UploadCommandHandler};
use crate::uploader::{BatchUploader, UploadOutcome, UploadRequest};

/// Builds the handler chain (logging → upload command) and wraps it in [`UploadBotEvents`].
/// Used by [`run_bot`] and by tests that drive the bot with a mock [`Bot`].
pub fn build_events(config: &BotConfig, bot: Arc<dyn Bot>) -> UploadBotEvents {
    let bot_username = Arc::new(RwLock::new(None));
    let upload_handler = UploadCommandHandler::new(
        bot.clone(),
        config.upload.clone(),
        config.command_prefix.clone(),
        bot_username.clone(),
    );
    let chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(upload_handler));
    UploadBotEvents::new(bot, chain, bot_username)
}

/// Validates config, initializes logging, then serves commands until the process is stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        batch_size = config.upload.batch_size,
        batch_delay_ms = config.upload.batch_delay.as_millis() as u64,
        extensions = ?config.upload.allowed_extensions,
        command_prefix = %config.command_prefix,
        "Initializing bot"
    );

    let teloxide_bot = config.base.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let events = Arc::new(build_events(&config, bot));

    run_repl(teloxide_bot, events).await
}

/// Uploads `path` into `chat_id` once and returns. `batch_size` overrides UPLOAD_BATCH_SIZE.
#[instrument(skip(config))]
pub async fn upload_once(
    mut config: BotConfig,
    chat_id: i64,
    path: &Path,
    batch_size: Option<usize>,
) -> Result<UploadOutcome> {
    if let Some(batch_size) = batch_size {
        config.upload.batch_size = batch_size;
    }
    config.validate()?;
    init_tracing(config.log_file())?;

    let teloxide_bot = config.base.telegram.build_bot()?;
    let me = connect(&teloxide_bot).await?;
    info!("Logged in as {}", me.display_name());

    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot));
    let chat = Chat {
        id: chat_id,
        chat_type: "unknown".to_string(),
    };
    let request = UploadRequest::new(path, &config.upload);
    let outcome = BatchUploader::new(bot, &config.upload)
        .run(&chat, &request)
        .await?;
    Ok(outcome)
}
