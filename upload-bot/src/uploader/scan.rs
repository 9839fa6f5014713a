//! Non-recursive directory listing filtered by file extension.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::UploadError;

/// True when `file_name` ends with `.{ext}` for one of `extensions` (lowercase, no dot), ignoring case.
pub fn has_allowed_extension(file_name: &str, extensions: &[String]) -> bool {
    let lower = file_name.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// Lists regular files directly inside `dir` whose names match `extensions`, sorted by file name.
///
/// Symlinks are followed; subdirectories are never entered.
pub async fn scan_directory(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, UploadError> {
    let is_dir = tokio::fs::metadata(dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(UploadError::InvalidDirectory {
            path: dir.to_path_buf(),
        });
    }

    let list_err = |source| UploadError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = tokio::fs::read_dir(dir).await.map_err(list_err)?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        let path = entry.path();
        // Lossy so non-UTF-8 names still match on their (ASCII) extension.
        if !has_allowed_extension(&entry.file_name().to_string_lossy(), extensions) {
            continue;
        }
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => debug!(path = %path.display(), error = %e, "skipping unreadable entry"),
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
