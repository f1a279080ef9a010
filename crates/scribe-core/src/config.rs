//! Composer configuration options

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Visual style variant for the composer chrome
///
/// Purely presentational; no option here changes engine behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Standard bordered composer
    #[default]
    Default,
    /// Reduced chrome for embedding in cards
    Minimal,
    /// Strong border treatment for standalone pages
    Outlined,
}

impl Variant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            Variant::Default => "composer-default",
            Variant::Minimal => "composer-minimal",
            Variant::Outlined => "composer-outlined",
        }
    }
}

/// Visual size for the composer chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Size {
    /// Compact single-post composer
    Small,
    /// Default size
    #[default]
    Medium,
    /// Full-page editing
    Large,
}

impl Size {
    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            Size::Small => "composer-sm",
            Size::Medium => "composer-md",
            Size::Large => "composer-lg",
        }
    }
}

/// Configuration for a [`ComposerEngine`](crate::engine::ComposerEngine)
///
/// All flags are recognized even when a feature is unused so that host
/// toolbar configuration stays forward-compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposerOptions {
    /// Visual variant; no behavioral effect
    pub variant: Variant,
    /// Visual size; no behavioral effect
    pub size: Size,
    /// Placeholder shown while the document is empty
    pub placeholder: String,
    /// Initial content when the composer is uncontrolled
    pub default_value: Option<String>,
    /// Disables all mutation paths
    pub disabled: bool,
    /// Read-only surface; dispatch and writes become no-ops
    pub read_only: bool,
    /// Show the formatting toolbar
    pub show_toolbar: bool,
    /// Show the character counter in the footer
    pub show_char_count: bool,
    /// Display threshold for the character counter; never enforced as a
    /// hard limit, content is not truncated past it
    pub max_length: Option<usize>,
    /// Show the word counter in the footer
    pub show_word_count: bool,
    /// Enable the `@` mention trigger and picker
    pub enable_mentions: bool,
    /// Declared extension point; currently has no observable effect
    pub enable_hashtags: bool,
    /// Enable the emoji picker
    pub enable_emoji: bool,
    /// Enable media upload insertion
    pub enable_media: bool,
    /// Enable the debounced autosave scheduler
    pub auto_save: bool,
    /// Quiescence interval before a save fires
    pub auto_save_interval: Duration,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            size: Size::default(),
            placeholder: "Write something...".to_string(),
            default_value: None,
            disabled: false,
            read_only: false,
            show_toolbar: true,
            show_char_count: false,
            max_length: None,
            show_word_count: false,
            enable_mentions: true,
            enable_hashtags: false,
            enable_emoji: true,
            enable_media: true,
            auto_save: false,
            auto_save_interval: Duration::from_secs(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_editable() {
        let opts = ComposerOptions::default();
        assert!(!opts.disabled);
        assert!(!opts.read_only);
        assert!(opts.enable_mentions);
        assert!(!opts.auto_save);
    }

    #[test]
    fn test_variant_classes_are_distinct() {
        assert_ne!(Variant::Default.class(), Variant::Minimal.class());
        assert_ne!(Size::Small.class(), Size::Large.class());
    }
}
