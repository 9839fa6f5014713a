//! # Handler chain
//!
//! Runs a sequence of handlers for each message. Every handler's `before` runs in order (any false
//! stops the chain); then `handle` runs until one returns Stop or Reply; then every `after` runs in
//! reverse order with the final response.

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered list of handlers; cheap to clone into spawned per-message tasks.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs before → handle → after. Returns the first Stop or Reply, Stop when a `before`
    /// vetoed, or Continue when no handler claimed the message.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.run_before(message).await? {
            return Ok(HandlerResponse::Stop);
        }

        let response = self.run_handle(message).await?;

        for h in self.handlers.iter().rev() {
            h.after(message, &response).await?;
        }

        debug!(response = ?response, "handler chain finished");
        Ok(response)
    }

    async fn run_before(&self, message: &Message) -> Result<bool> {
        for h in &self.handlers {
            if !h.before(message).await? {
                info!(
                    handler = h.name(),
                    user_id = message.user.id,
                    "before returned false, chain stopped"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    async fn run_handle(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            match h.handle(message).await? {
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
                response => {
                    info!(
                        handler = h.name(),
                        user_id = message.user.id,
                        "message claimed by handler"
                    );
                    return Ok(response);
                }
            }
        }
        Ok(HandlerResponse::Continue)
    }
}

// Integration tests live in tests/handler_chain_test.rs
