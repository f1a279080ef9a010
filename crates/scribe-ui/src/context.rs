//! Composer context for Scribe UI
//!
//! Provides the engine instance to all components via use_context, plus
//! the render snapshot components actually draw from.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(shared_engine));
//!
//! // In child components
//! let engine = use_composer();
//! let view = use_composer_view();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use scribe_core::{
    char_count_display, AutosaveStatus, CharCountDisplay, ComposerEngine, ContentCounts,
    EmojiCategory, EmojiEntry, MentionUser, PickerPhase,
};
use tokio::sync::Mutex;

/// Shared engine type for context
///
/// The engine is wrapped in Arc<Mutex<>> so event handlers can lock it
/// from spawned tasks while the render tree stays lock-free.
pub type SharedComposer = Arc<Mutex<ComposerEngine>>;

/// Hook to access the composer engine from context
pub fn use_composer() -> Signal<SharedComposer> {
    use_context::<Signal<SharedComposer>>()
}

/// Hook to access the current render snapshot from context
pub fn use_composer_view() -> Signal<ComposerView> {
    use_context::<Signal<ComposerView>>()
}

/// Immutable snapshot of everything the component tree renders
///
/// Rebuilt after every engine mutation; holding plain data here keeps the
/// engine lock out of the render path entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerView {
    pub markup: String,
    pub plain_text: String,
    pub placeholder: String,
    pub disabled: bool,
    pub read_only: bool,
    pub show_toolbar: bool,
    /// Whether the image button has somewhere to send an upload
    pub can_insert_media: bool,
    /// CSS classes for the configured variant and size
    pub style_class: String,
    pub counts: ContentCounts,
    /// Footer character display, `None` when `show_char_count` is off
    pub char_display: Option<CharCountDisplay>,
    pub show_word_count: bool,
    pub autosave: AutosaveStatus,
    pub mention_phase: PickerPhase,
    pub mention_query: String,
    pub mention_results: Vec<MentionUser>,
    pub emoji_phase: PickerPhase,
    pub emoji_query: String,
    pub emoji_category: EmojiCategory,
    pub emoji_results: Vec<EmojiEntry>,
    /// URL text of the link dialog, `None` while closed
    pub link_dialog: Option<String>,
}

impl Default for ComposerView {
    fn default() -> Self {
        Self {
            markup: String::new(),
            plain_text: String::new(),
            placeholder: String::new(),
            disabled: false,
            read_only: false,
            show_toolbar: true,
            can_insert_media: false,
            style_class: String::new(),
            counts: ContentCounts::default(),
            char_display: None,
            show_word_count: false,
            autosave: AutosaveStatus::Idle,
            mention_phase: PickerPhase::Closed,
            mention_query: String::new(),
            mention_results: Vec::new(),
            emoji_phase: PickerPhase::Closed,
            emoji_query: String::new(),
            emoji_category: EmojiCategory::Smileys,
            emoji_results: Vec::new(),
            link_dialog: None,
        }
    }
}

impl ComposerView {
    /// Capture a snapshot of the engine for rendering
    pub fn capture(engine: &ComposerEngine) -> Self {
        let state = engine.state();
        let options = engine.options();
        let mention = engine.mention_picker();
        let emoji = engine.emoji_picker();
        Self {
            plain_text: state.plain_text,
            markup: state.raw_markup,
            placeholder: options.placeholder.clone(),
            disabled: options.disabled,
            read_only: options.read_only,
            show_toolbar: options.show_toolbar,
            can_insert_media: options.enable_media && engine.media_uploader().is_some(),
            style_class: format!("{} {}", options.variant.class(), options.size.class()),
            counts: engine.counts(),
            char_display: options
                .show_char_count
                .then(|| char_count_display(engine.counts(), options.max_length)),
            show_word_count: options.show_word_count,
            autosave: engine.autosave_status(),
            mention_phase: mention.phase(),
            mention_query: mention.query().to_string(),
            mention_results: mention.results().to_vec(),
            emoji_phase: emoji.phase(),
            emoji_query: emoji.query().to_string(),
            emoji_category: emoji.category(),
            emoji_results: emoji.results().to_vec(),
            link_dialog: engine.link_dialog_url().map(str::to_string),
        }
    }
}
