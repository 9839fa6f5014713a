//! Handler implementations: message logging and the upload command.

mod logging_handler;
mod upload_handler;

pub use logging_handler::LoggingHandler;
pub use upload_handler::{UploadCommandHandler, MSG_NOT_ALLOWED, MSG_UPLOAD_RUNNING};
