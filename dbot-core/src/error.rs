//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error; [`HandlerError`] is used for command handling failures.

use thiserror::Error;

/// Top-level error for dbot (transport and startup).
#[derive(Error, Debug)]
pub enum DbotError {
    /// Any failure reported by the chat platform (network, size limits, throttling).
    #[error("Bot error: {0}")]
    Bot(String),

    /// A required environment variable is not set; raised before the bot starts.
    #[error("{0} not set")]
    MissingConfiguration(String),

    /// The platform refused the bot token at startup.
    #[error("Authentication rejected: {0}")]
    AuthenticationRejected(String),
}

/// Errors produced while parsing a command.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Command recognised but its argument is missing; carries the usage line.
    #[error("{0}")]
    MissingArgument(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
