//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// `@username` when set, otherwise the first name, otherwise the numeric id.
    pub fn display_name(&self) -> String {
        match (&self.username, &self.first_name) {
            (Some(username), _) => format!("@{}", username),
            (None, Some(first_name)) => first_name.clone(),
            (None, None) => self.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_username() {
        let user = User {
            id: 7,
            username: Some("uploader_bot".to_string()),
            first_name: Some("Uploader".to_string()),
            last_name: None,
        };
        assert_eq!(user.display_name(), "@uploader_bot");
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let user = User {
            id: 7,
            username: None,
            first_name: None,
            last_name: None,
        };
        assert_eq!(user.display_name(), "7");
    }
}
