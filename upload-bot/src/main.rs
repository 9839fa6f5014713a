//! upload-bot binary. Loads `.env`, parses the command line and runs the chosen mode.

use anyhow::Result;
use clap::Parser;
use dbot_core::DbotError;
use std::process::ExitCode;
use upload_bot::cli::{Cli, Commands};
use upload_bot::{run_bot, upload_once, BotConfig, UploadOutcome};

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Upload {
            chat_id,
            path,
            token,
            batch_size,
        } => {
            let config = BotConfig::load(token)?;
            match upload_once(config, chat_id, &path, batch_size).await? {
                UploadOutcome::NoFilesFound { path } => {
                    println!("No image files found in '{}'!", path.display());
                }
                UploadOutcome::Completed(report) => println!("{}", report.render()),
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if matches!(
                e.downcast_ref::<DbotError>(),
                Some(DbotError::AuthenticationRejected(_))
            ) {
                eprintln!("Failed to login: Invalid token");
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
