//! # dbot-telegram
//!
//! Telegram transport layer: teloxide → core adapters, [`dbot_core::Bot`] implementation, minimal
//! config, REPL runner. Handles only Telegram connectivity and event dispatch; no upload logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{map_request_error, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{connect, run_repl};
