//! REPL runner: checks the token with getMe, reports readiness to the [`EventHandler`], then feeds
//! every incoming text message to `dispatch` in its own task.

use anyhow::Result;
use dbot_core::{DbotError, EventHandler, ToCoreMessage, ToCoreUser, User};
use std::sync::Arc;
use teloxide::{prelude::*, ApiError, RequestError};
use tracing::{error, info, instrument};

use super::adapters::{TelegramMessageWrapper, TelegramUserWrapper};

/// True when Telegram refused the token itself rather than failing transiently.
fn is_token_rejected(e: &RequestError) -> bool {
    if matches!(e, RequestError::Api(ApiError::InvalidToken)) {
        return true;
    }
    let text = e.to_string();
    text.contains("Unauthorized") || text.contains("Not Found")
}

/// Calls getMe and returns the bot's own identity. A rejected token becomes
/// [`DbotError::AuthenticationRejected`]; anything else is a transport error.
pub async fn connect(bot: &teloxide::Bot) -> std::result::Result<User, DbotError> {
    match bot.get_me().await {
        Ok(me) => Ok(TelegramUserWrapper(&me.user).to_core()),
        Err(e) if is_token_rejected(&e) => Err(DbotError::AuthenticationRejected(e.to_string())),
        Err(e) => Err(DbotError::Bot(e.to_string())),
    }
}

/// Starts the REPL. Returns early with the startup error when getMe fails; otherwise runs until
/// the process is stopped.
#[instrument(skip(bot, events))]
pub async fn run_repl(bot: teloxide::Bot, events: Arc<dyn EventHandler>) -> Result<()> {
    let me = connect(&bot).await?;
    events.on_ready(&me).await?;
    info!(bot = %me.display_name(), "Bot ready, starting repl");

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let events = events.clone();

        async move {
            if msg.text().is_none() {
                return respond(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            // Uploads take minutes; run off the REPL so other chats keep being served.
            tokio::spawn(async move {
                if let Err(e) = events.dispatch(&core_msg).await {
                    error!(error = %e, chat_id = core_msg.chat.id, "Dispatch failed");
                    events.on_error(&core_msg, &e).await;
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
