//! Logs each message in before() and the response with its handling time in after(); never
//! claims a message.

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            chat_id = message.chat.id,
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let elapsed_ms = (Utc::now() - message.received_at).num_milliseconds();
        debug!(
            message_id = %message.id,
            response = ?response,
            elapsed_ms,
            "Processed message"
        );
        Ok(())
    }
}
