//! # upload-bot
//!
//! Telegram bot that uploads every image in a local folder to a chat, up to ten files per message,
//! keeping one status message updated with a progress bar and a final timing summary.
//!
//! - [`uploader`]: scan, batch, send, progress ([`BatchUploader`]).
//! - [`handlers`]: chain handlers, including the `/upload_screenshots` command.
//! - [`events`]: startup and error hooks for the REPL runner.
//! - [`runner`]: [`run_bot`] and the one-shot [`upload_once`].

pub mod cli;
pub mod command;
pub mod config;
pub mod events;
pub mod handlers;
pub mod runner;
pub mod uploader;

pub use command::{help_text, parse_command, usage, Command};
pub use config::{BotConfig, UploadSettings};
pub use events::{UploadBotEvents, READY_STATUS};
pub use handlers::{LoggingHandler, UploadCommandHandler, MSG_NOT_ALLOWED, MSG_UPLOAD_RUNNING};
pub use runner::{build_events, run_bot, upload_once};
pub use uploader::{BatchUploader, CompletionReport, UploadError, UploadOutcome, UploadRequest};
