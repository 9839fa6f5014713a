//! Command-line interface: `upload-bot run` serves commands, `upload-bot upload` does one folder.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "upload-bot")]
#[command(about = "Uploads folders of screenshots to Telegram chats in batches", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the bot and answer /upload_screenshots commands (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Upload one folder to a chat and exit.
    Upload {
        /// Target chat id (negative for groups and channels).
        #[arg(short, long, allow_hyphen_values = true)]
        chat_id: i64,
        /// Folder holding the screenshots.
        path: PathBuf,
        #[arg(short, long)]
        token: Option<String>,
        /// Files per message (1-10); defaults to UPLOAD_BATCH_SIZE.
        #[arg(short, long)]
        batch_size: Option<usize>,
    },
}
