//! Lifecycle hooks for the upload bot: readiness, routing through the handler chain, and error
//! replies.

use async_trait::async_trait;
use dbot_core::{Bot, DbotError, EventHandler, HandlerResponse, Message, Result, User};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

pub const READY_STATUS: &str = "Ready to upload screenshots";

/// [`EventHandler`] for the upload bot. Shares `bot_username` with the upload handler so group
/// commands addressed as `/cmd@name` are recognised once the bot knows its own name.
pub struct UploadBotEvents {
    bot: Arc<dyn Bot>,
    chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl UploadBotEvents {
    pub fn new(
        bot: Arc<dyn Bot>,
        chain: HandlerChain,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            bot,
            chain,
            bot_username,
        }
    }
}

#[async_trait]
impl EventHandler for UploadBotEvents {
    async fn on_ready(&self, me: &User) -> Result<()> {
        *self.bot_username.write().await = me.username.clone();
        info!(user_id = me.id, username = ?me.username, "Logged in as {}", me.display_name());

        // The status line is cosmetic; a refusal must not keep the bot from serving commands.
        if let Err(e) = self.bot.set_status(READY_STATUS).await {
            warn!(error = %e, "could not set bot status");
        }
        Ok(())
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    async fn dispatch(&self, message: &Message) -> Result<HandlerResponse> {
        self.chain.handle(message).await
    }

    async fn on_error(&self, message: &Message, error: &DbotError) {
        let text = format!("❌ An error occurred: {}", error);
        if let Err(e) = self.bot.reply_to(message, &text).await {
            error!(error = %e, chat_id = message.chat.id, "could not report error to chat");
        }
    }
}
