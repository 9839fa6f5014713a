//! Bot abstraction for sending, attaching and editing messages.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute a
//! recording mock.

use crate::error::{DbotError, Result};
use crate::types::{Attachment, Chat, Message};
use async_trait::async_trait;

/// Outgoing calls the bot makes against the chat platform.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;

    /// Sends a text message and returns its id, the handle later passed to [`Bot::edit_message`].
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String>;

    /// Replaces the text of an already-sent message. `message_id` is transport-specific
    /// (a numeric string on Telegram).
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;

    /// Sends all `attachments` as one outgoing message. `caption` is shown once for the whole group.
    async fn send_attachments(
        &self,
        chat: &Chat,
        caption: Option<&str>,
        attachments: Vec<Attachment>,
    ) -> Result<()>;

    /// Sets the bot's public status line. Cosmetic; transports without one keep the default no-op.
    async fn set_status(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Parses a message id string into an i32. Used by Telegram edits.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
