//! Shared fixtures for upload-bot integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use dbot_core::{Chat, Message, User};
use std::path::Path;
use std::time::Duration;
use upload_bot::UploadSettings;

pub const CHAT_ID: i64 = 1001;
pub const USER_ID: i64 = 7;

pub fn chat() -> Chat {
    Chat {
        id: CHAT_ID,
        chat_type: "private".to_string(),
    }
}

/// Incoming text message from `user_id` in [`CHAT_ID`].
pub fn message_from(user_id: i64, content: &str) -> Message {
    Message {
        id: "m1".to_string(),
        user: User {
            id: user_id,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        },
        chat: chat(),
        content: content.to_string(),
        received_at: Utc::now(),
    }
}

pub fn message(content: &str) -> Message {
    message_from(USER_ID, content)
}

/// Default settings with the given batch size and no pause between batches.
pub fn settings(batch_size: usize) -> UploadSettings {
    UploadSettings {
        batch_size,
        batch_delay: Duration::ZERO,
        ..UploadSettings::default()
    }
}

/// Creates each named file under `dir` with a few bytes of content.
pub fn write_files(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), name.as_bytes()).unwrap();
    }
}

/// `shot_00.png`, `shot_01.png`, ...
pub fn numbered_pngs(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("shot_{:02}.png", i)).collect()
}
