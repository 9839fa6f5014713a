//! Folder → chat batch upload: scan, chunk, send, report progress.
//!
//! Entry point is [`BatchUploader::run`]; the other modules are its pure building blocks.

mod batch;
mod batch_uploader;
mod error;
mod progress;
mod scan;

pub use batch::{batch_count, plan_batches, Batch};
pub use batch_uploader::{BatchUploader, UploadOutcome, UploadRequest};
pub use error::UploadError;
pub use progress::{
    filled_len, percent, render_bar, throughput, CompletionReport, ProgressState, BAR_WIDTH,
};
pub use scan::{has_allowed_extension, scan_directory};
