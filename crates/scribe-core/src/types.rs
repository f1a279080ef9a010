//! Core types for the Scribe composer engine

use serde::{Deserialize, Serialize};

/// Snapshot of the document state held by the engine
///
/// `plain_text` is always derived from `raw_markup` by stripping markup
/// tags; it is never set independently. The engine enforces this by
/// constructing every snapshot through [`EditorState::from_markup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorState {
    /// Full markup content of the document
    pub raw_markup: String,
    /// Markup content with all tags stripped
    pub plain_text: String,
    /// Whether an external owner currently controls the content
    pub is_controlled: bool,
}

impl EditorState {
    /// Build a snapshot from markup, deriving the plain text
    pub fn from_markup(markup: impl Into<String>, is_controlled: bool) -> Self {
        let raw_markup = markup.into();
        let plain_text = crate::surface::strip_markup(&raw_markup);
        Self {
            raw_markup,
            plain_text,
            is_controlled,
        }
    }
}

/// A user that can be inserted as a mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionUser {
    /// Stable identifier within the host platform
    pub id: String,
    /// Handle inserted into the document as `@username`
    pub username: String,
    /// Name shown in the picker row
    pub display_name: String,
    /// Optional avatar URL for the picker row
    pub avatar: Option<String>,
}

impl MentionUser {
    /// Convenience constructor for the common fields
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            display_name: display_name.into(),
            avatar: None,
        }
    }
}

impl std::fmt::Display for MentionUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (@{})", self.display_name, self.username)
    }
}

/// A file handed to the media upload provider
///
/// The engine never inspects the bytes; it only forwards them and inserts
/// the URL the provider returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Original file name
    pub name: String,
    /// MIME type as reported by the host
    pub mime: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_state_derives_plain_text() {
        let state = EditorState::from_markup("<strong>Hello</strong> world", false);
        assert_eq!(state.plain_text, "Hello world");
        assert_eq!(state.raw_markup, "<strong>Hello</strong> world");
    }

    #[test]
    fn test_mention_user_display() {
        let user = MentionUser::new("1", "ana", "Ana");
        assert_eq!(user.to_string(), "Ana (@ana)");
    }
}
