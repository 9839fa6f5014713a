//! Handler trait, bot lifecycle trait, and transport conversion traits.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};
use crate::error::{DbotError, Result};

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until
/// Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Name used in chain logs. Defaults to the implementing type's path.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}

/// Bot lifecycle as seen by the runner: startup, each incoming message, and dispatch failures.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Called once after the platform accepted the token, with the bot's own identity.
    async fn on_ready(&self, me: &User) -> Result<()>;

    /// Routes one incoming message.
    async fn dispatch(&self, message: &Message) -> Result<HandlerResponse>;

    /// Called with the error when [`EventHandler::dispatch`] fails.
    async fn on_error(&self, message: &Message, error: &DbotError);
}
