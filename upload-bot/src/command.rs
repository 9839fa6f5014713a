//! Command parsing for `{prefix}upload_screenshots <folder_path>` and `{prefix}help`.

use dbot_core::HandlerError;

pub const UPLOAD_COMMAND: &str = "upload_screenshots";
pub const HELP_COMMAND: &str = "help";

/// A recognised bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    UploadScreenshots { folder_path: String },
    Help,
}

pub fn usage(prefix: &str) -> String {
    format!("Usage: {}{} <folder_path>", prefix, UPLOAD_COMMAND)
}

/// Usage plus what gets uploaded; `extensions` are the configured ones, lowercase without dots.
pub fn help_text(prefix: &str, extensions: &[String]) -> String {
    let kinds = extensions
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join(" / ");
    format!(
        "{}\nUploads every {} file in the folder to this chat, in batches.\n{}{} shows this message.",
        usage(prefix),
        kinds,
        prefix,
        HELP_COMMAND
    )
}

/// Removes one pair of matching surrounding quotes: `"My Shots"` → `My Shots`.
fn unquote(arg: &str) -> &str {
    for quote in ['"', '\''] {
        if arg.len() >= 2 && arg.starts_with(quote) && arg.ends_with(quote) {
            return &arg[1..arg.len() - 1];
        }
    }
    arg
}

/// Parses `text` as a command.
///
/// Returns `None` when the text is not one of our commands (no prefix, unknown name, or addressed
/// to another bot via `@name`). Returns `Some(Err(MissingArgument))` when the upload command has
/// no folder. The folder is everything after the command word, so paths may contain spaces.
pub fn parse_command(
    text: &str,
    prefix: &str,
    bot_username: Option<&str>,
) -> Option<Result<Command, HandlerError>> {
    let rest = text.trim().strip_prefix(prefix)?;
    let (word, arg) = match rest.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (rest, ""),
    };

    let name = match word.split_once('@') {
        Some((name, addressee)) => {
            let ours = bot_username.is_some_and(|me| me.eq_ignore_ascii_case(addressee));
            if !ours {
                return None;
            }
            name
        }
        None => word,
    };

    if name.eq_ignore_ascii_case(UPLOAD_COMMAND) {
        let folder_path = unquote(arg).trim();
        if folder_path.is_empty() {
            return Some(Err(HandlerError::MissingArgument(usage(prefix))));
        }
        return Some(Ok(Command::UploadScreenshots {
            folder_path: folder_path.to_string(),
        }));
    }
    if name.eq_ignore_ascii_case(HELP_COMMAND) {
        return Some(Ok(Command::Help));
    }
    None
}
