//! Upload command handler: parses `{prefix}upload_screenshots <folder>`, runs the
//! [`BatchUploader`] into the chat the command came from, and turns the outcome into replies.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::command::{help_text, parse_command, Command};
use crate::config::UploadSettings;
use crate::uploader::{BatchUploader, UploadOutcome, UploadRequest};

pub const MSG_UPLOAD_RUNNING: &str = "An upload is already running in this chat.";
pub const MSG_NOT_ALLOWED: &str = "You are not allowed to run uploads.";

type ActiveChats = Arc<Mutex<HashSet<i64>>>;

/// Marks a chat as busy for as long as it is held.
struct ChatLease {
    chats: ActiveChats,
    chat_id: i64,
}

impl ChatLease {
    fn acquire(chats: &ActiveChats, chat_id: i64) -> Option<Self> {
        let inserted = chats
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(chat_id);
        inserted.then(|| Self {
            chats: chats.clone(),
            chat_id,
        })
    }
}

impl Drop for ChatLease {
    fn drop(&mut self) {
        self.chats
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&self.chat_id);
    }
}

/// Handles the upload and help commands; every other message is passed on with Continue.
#[derive(Clone)]
pub struct UploadCommandHandler {
    bot: Arc<dyn Bot>,
    uploader: BatchUploader,
    settings: UploadSettings,
    command_prefix: String,
    /// Filled in by on_ready; used to accept `/cmd@this_bot` in groups.
    bot_username: Arc<RwLock<Option<String>>>,
    active_chats: ActiveChats,
}

impl UploadCommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        settings: UploadSettings,
        command_prefix: impl Into<String>,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            uploader: BatchUploader::new(bot.clone(), &settings),
            bot,
            settings,
            command_prefix: command_prefix.into(),
            bot_username,
            active_chats: Arc::default(),
        }
    }

    async fn reply(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }

    async fn upload(&self, message: &Message, folder_path: &str) -> Result<HandlerResponse> {
        if !self.settings.is_user_allowed(message.user.id) {
            warn!(user_id = message.user.id, "upload refused for user not in allowlist");
            return self.reply(message, MSG_NOT_ALLOWED.to_string()).await;
        }

        let Some(_lease) = ChatLease::acquire(&self.active_chats, message.chat.id) else {
            info!(chat_id = message.chat.id, "upload already running");
            return self.reply(message, MSG_UPLOAD_RUNNING.to_string()).await;
        };

        let request = UploadRequest::new(folder_path, &self.settings);
        match self.uploader.run(&message.chat, &request).await {
            Ok(UploadOutcome::NoFilesFound { path }) => {
                let text = format!("No image files found in '{}'!", path.display());
                self.reply(message, text).await
            }
            Ok(UploadOutcome::Completed(report)) => Ok(HandlerResponse::Reply(report.render())),
            Err(e) if e.is_reported() => Ok(HandlerResponse::Reply(e.user_message())),
            Err(e) => {
                warn!(error = %e, chat_id = message.chat.id, "upload failed");
                self.reply(message, e.user_message()).await
            }
        }
    }
}

#[async_trait]
impl Handler for UploadCommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        let command = match parse_command(&message.content, &self.command_prefix, username.as_deref())
        {
            None => return Ok(HandlerResponse::Continue),
            Some(Err(HandlerError::MissingArgument(usage))) => {
                return self.reply(message, usage).await
            }
            Some(Ok(command)) => command,
        };

        match command {
            Command::Help => {
                let text = help_text(&self.command_prefix, &self.settings.allowed_extensions);
                self.reply(message, text).await
            }
            Command::UploadScreenshots { folder_path } => self.upload(message, &folder_path).await,
        }
    }
}
