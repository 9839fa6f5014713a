//! Upload policy: batch size, pause between batches, accepted extensions, attachment kind.

use anyhow::Result;
use dbot_core::AttachmentKind;
use std::env;
use std::time::Duration;

/// Files per outgoing message.
pub const DEFAULT_BATCH_SIZE: usize = 10;
/// Telegram accepts at most 10 items in one media group.
pub const MAX_BATCH_SIZE: usize = 10;
/// Pause between two batch sends.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Policy handed to the uploader; replaces process-wide constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    pub batch_size: usize,
    pub batch_delay: Duration,
    /// Lowercase, without the leading dot.
    pub allowed_extensions: Vec<String>,
    pub attachment_kind: AttachmentKind,
    /// User ids allowed to start uploads; empty allows everyone.
    pub allowed_users: Vec<i64>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: DEFAULT_BATCH_DELAY,
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            attachment_kind: AttachmentKind::Photo,
            allowed_users: Vec::new(),
        }
    }
}

/// Splits a comma list into normalized extensions: trimmed, lowercase, leading dots removed,
/// empty items dropped. `".PNG, jpg,,"` → `["png", "jpg"]`.
pub fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| anyhow::anyhow!("{} has an invalid value: {}", name, raw)),
        _ => Ok(None),
    }
}

impl UploadSettings {
    /// Load from UPLOAD_* environment variables; unset ones keep their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let batch_size = parse_env("UPLOAD_BATCH_SIZE")?.unwrap_or(defaults.batch_size);
        let batch_delay = parse_env::<u64>("UPLOAD_BATCH_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.batch_delay);
        let allowed_extensions = env::var("UPLOAD_EXTENSIONS")
            .ok()
            .map(|raw| parse_extensions(&raw))
            .filter(|exts| !exts.is_empty())
            .unwrap_or(defaults.allowed_extensions);
        let attachment_kind = match parse_env::<bool>("UPLOAD_AS_DOCUMENT")? {
            Some(true) => AttachmentKind::Document,
            _ => AttachmentKind::Photo,
        };
        let allowed_users = match env::var("UPLOAD_ALLOWED_USERS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<i64>().map_err(|_| {
                        anyhow::anyhow!("UPLOAD_ALLOWED_USERS contains an invalid user id: {}", s)
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            batch_size,
            batch_delay,
            allowed_extensions,
            attachment_kind,
            allowed_users,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            anyhow::bail!(
                "UPLOAD_BATCH_SIZE must be between 1 and {}, got {}",
                MAX_BATCH_SIZE,
                self.batch_size
            );
        }
        if self.allowed_extensions.is_empty() {
            anyhow::bail!("UPLOAD_EXTENSIONS must name at least one extension");
        }
        Ok(())
    }

    pub fn is_user_allowed(&self, user_id: i64) -> bool {
        self.allowed_users.is_empty() || self.allowed_users.contains(&user_id)
    }
}
