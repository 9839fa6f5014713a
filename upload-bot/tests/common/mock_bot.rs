//! Recording implementation of [`dbot_core::Bot`] for upload tests.
//!
//! Every outgoing call is appended to a journal so tests can assert on exact order and content
//! without hitting Telegram. Attachment sends can be made to fail or to wait on a gate.

use async_trait::async_trait;
use dbot_core::{Attachment, AttachmentKind, Bot, Chat, DbotError, Message, Result};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Id returned by `send_message_and_return_id`.
pub const STATUS_MESSAGE_ID: &str = "42";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Send { chat_id: i64, text: String },
    Reply { chat_id: i64, text: String },
    Status { chat_id: i64, text: String },
    Edit { chat_id: i64, message_id: String, text: String },
    Attachments {
        chat_id: i64,
        caption: Option<String>,
        file_names: Vec<String>,
        kinds: Vec<AttachmentKind>,
    },
    SetStatus { text: String },
}

/// Pauses attachment sends until the test lets them through.
#[derive(Default)]
pub struct Gate {
    /// Notified when an attachment send reaches the gate.
    pub reached: Notify,
    /// Notify once to let the waiting send continue.
    pub release: Notify,
}

#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<Call>>,
    /// 1-based index of the attachment send that fails.
    fail_attachments_at: Option<usize>,
    fail_edits: bool,
    fail_status: bool,
    gate: Option<Arc<Gate>>,
}

#[allow(dead_code)]
impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_attachments_at(mut self, n: usize) -> Self {
        self.fail_attachments_at = Some(n);
        self
    }

    pub fn failing_edits(mut self) -> Self {
        self.fail_edits = true;
        self
    }

    pub fn failing_status(mut self) -> Self {
        self.fail_status = true;
        self
    }

    pub fn with_gate(mut self, gate: Arc<Gate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// File names per attachment send, in send order.
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Attachments { file_names, .. } => Some(file_names),
                _ => None,
            })
            .collect()
    }

    pub fn captions(&self) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Attachments { caption, .. } => Some(caption),
                _ => None,
            })
            .collect()
    }

    pub fn edits(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Edit { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn replies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Reply { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn attachment_sends(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, Call::Attachments { .. }))
            .count()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Call::Send {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(Call::Reply {
            chat_id: message.chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        if self.fail_status {
            return Err(DbotError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        self.record(Call::Status {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(STATUS_MESSAGE_ID.to_string())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        if self.fail_edits {
            return Err(DbotError::Bot("Bad Request: message to edit not found".to_string()));
        }
        self.record(Call::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_attachments(
        &self,
        chat: &Chat,
        caption: Option<&str>,
        attachments: Vec<Attachment>,
    ) -> Result<()> {
        if let Some(gate) = &self.gate {
            gate.reached.notify_one();
            gate.release.notified().await;
        }
        if self.fail_attachments_at == Some(self.attachment_sends() + 1) {
            return Err(DbotError::Bot("Too Many Requests: retry after 5".to_string()));
        }
        self.record(Call::Attachments {
            chat_id: chat.id,
            caption: caption.map(str::to_string),
            file_names: attachments.iter().map(|a| a.file_name.clone()).collect(),
            kinds: attachments.iter().map(|a| a.kind).collect(),
        });
        Ok(())
    }

    async fn set_status(&self, text: &str) -> Result<()> {
        self.record(Call::SetStatus {
            text: text.to_string(),
        });
        Ok(())
    }
}
