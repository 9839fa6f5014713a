//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code talks to Telegram; tests
//! point the adapter at a mock server or substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{
    parse_message_id, Attachment, AttachmentKind, Bot as CoreBot, Chat, DbotError, Message, Result,
};
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile, InputMedia, InputMediaDocument, InputMediaPhoto, MessageId},
    RequestError,
};
use tracing::debug;

/// Converts a teloxide request failure into the transport error kind.
pub fn map_request_error(e: RequestError) -> DbotError {
    DbotError::Bot(e.to_string())
}

fn input_file(attachment: Attachment) -> InputFile {
    InputFile::memory(attachment.data).file_name(attachment.file_name)
}

/// One media-group item; only the first item of a group carries the caption.
fn input_media(attachment: Attachment, caption: Option<&str>) -> InputMedia {
    let kind = attachment.kind;
    let file = input_file(attachment);
    match kind {
        AttachmentKind::Photo => {
            let mut media = InputMediaPhoto::new(file);
            if let Some(caption) = caption {
                media = media.caption(caption);
            }
            InputMedia::Photo(media)
        }
        AttachmentKind::Document => {
            let mut media = InputMediaDocument::new(file);
            if let Some(caption) = caption {
                media = media.caption(caption);
            }
            InputMedia::Document(media)
        }
    }
}

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// `sendMediaGroup` rejects groups of one, so a lone file goes through `sendPhoto` / `sendDocument`.
    async fn send_single(
        &self,
        chat_id: ChatId,
        caption: Option<&str>,
        attachment: Attachment,
    ) -> Result<()> {
        let kind = attachment.kind;
        let file = input_file(attachment);
        match kind {
            AttachmentKind::Photo => {
                let mut request = self.bot.send_photo(chat_id, file);
                if let Some(caption) = caption {
                    request = request.caption(caption);
                }
                request.await.map_err(map_request_error)?;
            }
            AttachmentKind::Document => {
                let mut request = self.bot.send_document(chat_id, file);
                if let Some(caption) = caption {
                    request = request.caption(caption);
                }
                request.await.map_err(map_request_error)?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(map_request_error)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(map_request_error)?;
        Ok(sent.id.to_string())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text.to_string())
            .await
            .map_err(map_request_error)?;
        Ok(())
    }

    async fn send_attachments(
        &self,
        chat: &Chat,
        caption: Option<&str>,
        mut attachments: Vec<Attachment>,
    ) -> Result<()> {
        let chat_id = ChatId(chat.id);
        debug!(chat_id = chat.id, files = attachments.len(), "sending attachments");

        match attachments.len() {
            0 => Ok(()),
            1 => self.send_single(chat_id, caption, attachments.remove(0)).await,
            _ => {
                let media: Vec<InputMedia> = attachments
                    .into_iter()
                    .enumerate()
                    .map(|(i, a)| input_media(a, if i == 0 { caption } else { None }))
                    .collect();
                self.bot
                    .send_media_group(chat_id, media)
                    .await
                    .map_err(map_request_error)?;
                Ok(())
            }
        }
    }

    async fn set_status(&self, text: &str) -> Result<()> {
        self.bot
            .set_my_short_description()
            .short_description(text.to_string())
            .await
            .map_err(map_request_error)?;
        Ok(())
    }
}
