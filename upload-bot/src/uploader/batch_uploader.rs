//! [`BatchUploader`]: Validate → Enumerate → (Send batch → Update progress → Pause)* → Report.

use dbot_core::{Attachment, AttachmentKind, Bot, Chat};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::batch::plan_batches;
use super::error::UploadError;
use super::progress::{CompletionReport, ProgressState};
use super::scan::scan_directory;
use crate::config::UploadSettings;

/// One upload invocation: which folder, how many files per message, which extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub source_path: PathBuf,
    pub batch_size: usize,
    pub allowed_extensions: Vec<String>,
}

impl UploadRequest {
    /// Request for `source_path` using the batch size and extensions from `settings`.
    pub fn new(source_path: impl Into<PathBuf>, settings: &UploadSettings) -> Self {
        Self {
            source_path: source_path.into(),
            batch_size: settings.batch_size,
            allowed_extensions: settings.allowed_extensions.clone(),
        }
    }
}

/// Non-error results of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The directory exists but holds no matching files; nothing was sent.
    NoFilesFound { path: PathBuf },
    Completed(CompletionReport),
}

/// Sends a folder's images to a chat, one message per batch, editing a single status message as
/// it goes. Strictly sequential; holds no state between runs.
#[derive(Clone)]
pub struct BatchUploader {
    bot: Arc<dyn Bot>,
    batch_delay: Duration,
    attachment_kind: AttachmentKind,
}

impl BatchUploader {
    pub fn new(bot: Arc<dyn Bot>, settings: &UploadSettings) -> Self {
        Self {
            bot,
            batch_delay: settings.batch_delay,
            attachment_kind: settings.attachment_kind,
        }
    }

    /// Overrides the pause between batches.
    pub fn with_batch_delay(mut self, batch_delay: Duration) -> Self {
        self.batch_delay = batch_delay;
        self
    }

    /// Runs one upload into `chat`.
    ///
    /// Errors before the first batch (bad path, listing failure, status message rejected) are
    /// returned without touching the chat. Errors after that come back as
    /// [`UploadError::Aborted`] and have already been written into the status message.
    #[instrument(skip(self, chat, request), fields(chat_id = chat.id, path = %request.source_path.display()))]
    pub async fn run(
        &self,
        chat: &Chat,
        request: &UploadRequest,
    ) -> Result<UploadOutcome, UploadError> {
        if request.batch_size == 0 {
            return Err(UploadError::InvalidBatchSize);
        }

        let files = scan_directory(&request.source_path, &request.allowed_extensions).await?;
        if files.is_empty() {
            info!("no matching files");
            return Ok(UploadOutcome::NoFilesFound {
                path: request.source_path.clone(),
            });
        }

        let total = files.len();
        info!(files = total, batch_size = request.batch_size, "starting upload");

        let mut progress = ProgressState::start(total);
        let status_id = self
            .bot
            .send_message_and_return_id(
                chat,
                &format!(
                    "Found {} files. Starting upload in batches of {}...",
                    total, request.batch_size
                ),
            )
            .await?;

        match self
            .upload_batches(chat, &status_id, &files, request.batch_size, &mut progress)
            .await
        {
            Ok(report) => {
                info!(
                    files = report.total_files,
                    batches = report.batches,
                    secs = report.duration.as_secs_f64(),
                    "upload finished"
                );
                Ok(UploadOutcome::Completed(report))
            }
            Err(source) => {
                let err = UploadError::Aborted {
                    uploaded: progress.files_uploaded,
                    total,
                    source: Box::new(source),
                };
                error!(error = %err, "upload aborted");
                self.report_failure(chat, &status_id, &err).await;
                Err(err)
            }
        }
    }

    async fn upload_batches(
        &self,
        chat: &Chat,
        status_id: &str,
        files: &[PathBuf],
        batch_size: usize,
        progress: &mut ProgressState,
    ) -> Result<CompletionReport, UploadError> {
        let batches = plan_batches(files, batch_size);

        for batch in &batches {
            let attachments = self.read_files(batch.files).await?;
            self.bot
                .send_attachments(chat, Some(&batch.caption()), attachments)
                .await?;

            progress.advance(batch.files.len());
            info!(
                batch = batch.index,
                of = batch.total,
                uploaded = progress.files_uploaded,
                "batch sent"
            );
            self.bot.edit_message(chat, status_id, &progress.render()).await?;

            if !batch.is_last() && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        let report = progress.finish(batches.len());
        self.bot.edit_message(chat, status_id, &report.render()).await?;
        Ok(report)
    }

    async fn read_files(&self, files: &[PathBuf]) -> Result<Vec<Attachment>, UploadError> {
        let mut attachments = Vec::with_capacity(files.len());
        for path in files {
            let data = tokio::fs::read(path)
                .await
                .map_err(|source| UploadError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
            debug!(path = %path.display(), bytes = data.len(), "read file");
            attachments.push(Attachment::new(file_name(path), data, self.attachment_kind));
        }
        Ok(attachments)
    }

    /// Best effort: edit the status message, fall back to a new message.
    async fn report_failure(&self, chat: &Chat, status_id: &str, err: &UploadError) {
        let text = err.user_message();
        if let Err(e) = self.bot.edit_message(chat, status_id, &text).await {
            warn!(error = %e, "could not edit status message, sending a new one");
            if let Err(e) = self.bot.send_message(chat, &text).await {
                error!(error = %e, "could not report upload failure");
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
