//! # dbot-core
//!
//! Core types and traits for the upload bot: [`Bot`], [`Handler`], [`EventHandler`], message, chat,
//! attachment types, and tracing initialization. Transport-agnostic; used by dbot-telegram,
//! handler-chain and upload-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Attachment, AttachmentKind, Chat, EventHandler, Handler, HandlerResponse, Message,
    ToCoreMessage, ToCoreUser, User,
};
