//! [`UploadError`]: why a run stopped, and the text shown for it in the chat.

use dbot_core::DbotError;
use std::path::PathBuf;
use thiserror::Error;

/// Why an upload run stopped.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("'{}' is not a valid directory!", path.display())]
    InvalidDirectory { path: PathBuf },

    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    #[error("cannot list '{}': {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Transport(#[from] DbotError),

    /// Failure after batches started going out. Already-sent batches stay in the chat.
    #[error("{source} (uploaded {uploaded}/{total} files)")]
    Aborted {
        uploaded: usize,
        total: usize,
        #[source]
        source: Box<UploadError>,
    },
}

impl UploadError {
    /// Text shown in the chat for this error.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::InvalidDirectory { .. } => format!("Error: {}", self),
            _ => format!("❌ An error occurred: {}", self),
        }
    }

    /// True when the uploader already wrote this error into its status message.
    pub fn is_reported(&self) -> bool {
        matches!(self, UploadError::Aborted { .. })
    }
}
