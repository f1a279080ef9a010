//! ComposerEngine - the primary entry point for the Scribe composer
//!
//! The engine coordinates the document surface, command dispatch, picker
//! state machines, the autosave scheduler, and controlled-content
//! synchronization:
//! - All mutation flows through `&mut self` on one event loop; suspension
//!   points are exclusively collaborator calls
//! - UI layers subscribe to a broadcast channel for change, focus, picker,
//!   and autosave notifications
//!
//! # Example
//!
//! ```ignore
//! use scribe_core::{ComposerEngine, ComposerOptions, Collaborators};
//!
//! let mut engine = ComposerEngine::new(ComposerOptions::default(), Collaborators::new());
//! engine.insert_text("Hello");
//! engine.dispatch(CommandId::Bold, None);
//! let state = engine.state();
//! ```

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::autosave::AutosaveHandle;
use crate::commands::{
    shortcut_action, CommandId, Key, KeyInput, LinkDialog, ShortcutAction,
};
use crate::config::ComposerOptions;
use crate::counters::{self, ContentCounts};
use crate::emoji::EmojiCategory;
use crate::error::ComposerResult;
use crate::events::{AutosaveStatus, ComposerEvent};
use crate::picker::{
    EmojiPickerState, MentionPickerState, MentionSearch, PickerKind,
};
use crate::providers::{Collaborators, MediaUploader};
use crate::surface::{BlockFormat, BufferSurface, DocumentSurface, InlineStyle};
use crate::sync::SyncController;
use crate::types::{EditorState, MediaFile, MentionUser};

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Headless composer engine over an abstract document surface
///
/// Generic over the surface so platform adapters and test doubles plug in;
/// defaults to the in-memory [`BufferSurface`].
pub struct ComposerEngine<S: DocumentSurface = BufferSurface> {
    surface: S,
    options: ComposerOptions,
    mention: MentionPickerState,
    emoji: EmojiPickerState,
    link_dialog: Option<LinkDialog>,
    sync: SyncController,
    counts: ContentCounts,
    autosave: Option<AutosaveHandle>,
    collaborators: Collaborators,
    event_tx: broadcast::Sender<ComposerEvent>,
    is_controlled: bool,
    next_token: u64,
}

impl ComposerEngine {
    /// Create an engine over a fresh in-memory surface
    ///
    /// Initial content comes from `options.default_value`. When autosave is
    /// enabled and a persistence sink is configured, the scheduler task is
    /// spawned; that path requires a running tokio runtime.
    pub fn new(options: ComposerOptions, collaborators: Collaborators) -> Self {
        let surface = BufferSurface::new(options.default_value.as_deref().unwrap_or(""));
        Self::with_surface(surface, options, collaborators)
    }
}

impl<S: DocumentSurface> ComposerEngine<S> {
    /// Create an engine over a caller-supplied surface
    pub fn with_surface(surface: S, options: ComposerOptions, collaborators: Collaborators) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let autosave = if options.auto_save {
            collaborators.persistence.clone().map(|sink| {
                AutosaveHandle::spawn(options.auto_save_interval, sink, event_tx.clone())
            })
        } else {
            None
        };
        let counts = counters::count(&surface.read_content().text);
        Self {
            surface,
            options,
            mention: MentionPickerState::default(),
            emoji: EmojiPickerState::default(),
            link_dialog: None,
            sync: SyncController::new(),
            counts,
            autosave,
            collaborators,
            event_tx,
            is_controlled: false,
            next_token: 0,
        }
    }

    /// Subscribe to engine notifications
    pub fn subscribe(&self) -> broadcast::Receiver<ComposerEvent> {
        self.event_tx.subscribe()
    }

    /// Configuration this engine was built with
    pub fn options(&self) -> &ComposerOptions {
        &self.options
    }

    /// Current document snapshot
    pub fn state(&self) -> EditorState {
        EditorState::from_markup(self.surface.read_content().markup, self.is_controlled)
    }

    /// Current derived counts
    pub fn counts(&self) -> ContentCounts {
        self.counts
    }

    /// Current autosave status; `Idle` when autosave is not running
    pub fn autosave_status(&self) -> AutosaveStatus {
        self.autosave
            .as_ref()
            .map(|a| a.status())
            .unwrap_or_default()
    }

    /// Mention picker state, for overlay rendering
    pub fn mention_picker(&self) -> &MentionPickerState {
        &self.mention
    }

    /// Emoji picker state, for overlay rendering
    pub fn emoji_picker(&self) -> &EmojiPickerState {
        &self.emoji
    }

    /// Direct surface access, for platform adapters
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access, for platform adapters syncing selection
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn editable(&self) -> bool {
        !self.options.disabled && !self.options.read_only
    }

    fn next_token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    fn emit(&self, event: ComposerEvent) {
        // A send error only means nobody is subscribed
        let _ = self.event_tx.send(event);
    }

    /// Bookkeeping after every user-driven mutation: counts, sync guard,
    /// autosave re-arm, and exactly one ContentChanged emission
    fn after_user_mutation(&mut self) {
        let content = self.surface.read_content();
        self.counts = counters::count(&content.text);
        self.sync.note_emitted(&content.markup);
        if let Some(autosave) = &self.autosave {
            autosave.note_mutation(content.markup.clone());
        }
        self.emit(ComposerEvent::ContentChanged {
            plain_text: content.text,
            raw_markup: content.markup,
        });
    }

    // ---- focus ----

    /// Focus the surface, emitting `Focused` on the transition
    pub fn focus(&mut self) {
        if !self.surface.is_focused() {
            self.surface.focus();
            self.emit(ComposerEvent::Focused);
        }
    }

    /// Blur the surface, emitting `Blurred` on the transition
    pub fn blur(&mut self) {
        if self.surface.is_focused() {
            self.surface.blur();
            self.emit(ComposerEvent::Blurred);
        }
    }

    // ---- commands ----

    /// Dispatch a formatting command against the surface
    ///
    /// Acquires focus first if absent. `value` carries the URL for
    /// `CreateLink`/`InsertImage`; an empty or missing URL never mutates.
    /// No-op when disabled or read-only.
    pub fn dispatch(&mut self, id: CommandId, value: Option<&str>) {
        if !self.editable() {
            return;
        }
        if !self.surface.is_focused() {
            self.focus();
        }
        let before = self.surface.read_content().markup;
        match id {
            CommandId::Bold => self.surface.apply_inline_style(InlineStyle::Bold),
            CommandId::Italic => self.surface.apply_inline_style(InlineStyle::Italic),
            CommandId::Underline => self.surface.apply_inline_style(InlineStyle::Underline),
            CommandId::Strikethrough => {
                self.surface.apply_inline_style(InlineStyle::Strikethrough)
            }
            CommandId::Heading1 => self.surface.toggle_block_format(BlockFormat::Heading1),
            CommandId::Heading2 => self.surface.toggle_block_format(BlockFormat::Heading2),
            CommandId::Heading3 => self.surface.toggle_block_format(BlockFormat::Heading3),
            CommandId::Paragraph => self.surface.toggle_block_format(BlockFormat::Paragraph),
            CommandId::UnorderedList => {
                self.surface.toggle_block_format(BlockFormat::UnorderedList)
            }
            CommandId::OrderedList => self.surface.toggle_block_format(BlockFormat::OrderedList),
            CommandId::Quote => self.surface.toggle_block_format(BlockFormat::Quote),
            CommandId::CodeBlock => self.surface.toggle_block_format(BlockFormat::CodeBlock),
            CommandId::AlignLeft => self.surface.toggle_block_format(BlockFormat::AlignLeft),
            CommandId::AlignCenter => self.surface.toggle_block_format(BlockFormat::AlignCenter),
            CommandId::AlignRight => self.surface.toggle_block_format(BlockFormat::AlignRight),
            CommandId::AlignJustify => self.surface.toggle_block_format(BlockFormat::AlignJustify),
            CommandId::CreateLink => {
                let Some(url) = value.map(str::trim).filter(|u| !u.is_empty()) else {
                    return;
                };
                self.surface.insert_link(url);
            }
            CommandId::InsertImage => {
                let Some(url) = value.map(str::trim).filter(|u| !u.is_empty()) else {
                    return;
                };
                self.surface.insert_image(url);
            }
            CommandId::Undo => self.surface.undo(),
            CommandId::Redo => self.surface.redo(),
        }
        // Undo/redo on exhausted stacks change nothing; emit only real edits
        if self.surface.read_content().markup != before {
            self.after_user_mutation();
        }
    }

    /// Dispatch by textual id; unknown ids are inert
    pub fn dispatch_named(&mut self, id: &str, value: Option<&str>) {
        match CommandId::parse(id) {
            Some(command) => self.dispatch(command, value),
            None => debug!(command = id, "ignoring unknown command"),
        }
    }

    // ---- text input ----

    /// Insert typed text at the caret
    ///
    /// Runs trigger detection: a typed `@` opens the mention picker, and
    /// typing while it is open extends the query. The returned search, if
    /// any, must be resolved against the mention provider (see
    /// [`refresh_mentions`](Self::refresh_mentions)).
    pub fn insert_text(&mut self, text: &str) -> Option<MentionSearch> {
        if !self.editable() {
            return None;
        }
        self.surface.insert_text(text);
        let search = self.scan_trigger(text);
        self.after_user_mutation();
        search
    }

    fn scan_trigger(&mut self, text: &str) -> Option<MentionSearch> {
        if self.mention.is_open() {
            if text.chars().any(char::is_whitespace) {
                self.close_mention();
                return None;
            }
            let token = self.next_token();
            return Some(self.mention.extend_query(text, token));
        }
        if text == "@" && self.options.enable_mentions {
            self.close_emoji();
            let token = self.next_token();
            let trigger_start = self.surface.caret() - 1;
            let search = self.mention.open(token, Some(trigger_start));
            self.emit(ComposerEvent::PickerOpened(PickerKind::Mention));
            return Some(search);
        }
        None
    }

    /// Delete backwards, shrinking an open mention query with the text
    pub fn delete_backward(&mut self) -> Option<MentionSearch> {
        if !self.editable() {
            return None;
        }
        let search = if self.mention.is_open() {
            let token = self.next_token();
            match self.mention.shrink_query(token) {
                Some(search) => Some(search),
                None => {
                    // The `@` itself is going away
                    self.close_mention();
                    None
                }
            }
        } else {
            None
        };
        let before = self.surface.read_content().markup;
        self.surface.delete_backward();
        if self.surface.read_content().markup != before {
            self.after_user_mutation();
        }
        search
    }

    // ---- keyboard ----

    /// Handle a normalized key event
    ///
    /// Routing order: link dialog, Escape, shortcut chords, plain input.
    /// Returns a mention search to resolve when typing touched the trigger.
    pub fn handle_key(&mut self, input: KeyInput) -> Option<MentionSearch> {
        if !self.editable() {
            return None;
        }

        if self.link_dialog.is_some() {
            match input.key {
                Key::Enter => {
                    if let Some(dialog) = self.link_dialog.take() {
                        self.emit(ComposerEvent::LinkDialogClosed);
                        if let Some(url) = dialog.submit() {
                            self.dispatch(CommandId::CreateLink, Some(&url));
                        }
                    }
                }
                Key::Escape => {
                    self.link_dialog = None;
                    self.emit(ComposerEvent::LinkDialogClosed);
                }
                Key::Char(c) if !input.ctrl => {
                    if let Some(dialog) = &mut self.link_dialog {
                        dialog.push(c);
                    }
                }
                Key::Backspace => {
                    if let Some(dialog) = &mut self.link_dialog {
                        dialog.pop();
                    }
                }
                _ => {}
            }
            return None;
        }

        if input.key == Key::Escape {
            self.close_pickers();
            return None;
        }

        if let Some(action) = shortcut_action(&input) {
            match action {
                ShortcutAction::Dispatch(id) => self.dispatch(id, None),
                ShortcutAction::OpenLinkDialog => self.open_link_dialog(),
            }
            return None;
        }

        match input.key {
            Key::Char(c) if !input.ctrl => self.insert_text(&c.to_string()),
            Key::Enter => self.insert_text("\n"),
            Key::Backspace => self.delete_backward(),
            _ => None,
        }
    }

    // ---- link dialog ----

    /// Open the two-phase link dialog
    pub fn open_link_dialog(&mut self) {
        if !self.editable() || self.link_dialog.is_some() {
            return;
        }
        self.link_dialog = Some(LinkDialog::new());
        self.emit(ComposerEvent::LinkDialogOpened);
    }

    /// Whether the link dialog is open
    pub fn link_dialog_open(&self) -> bool {
        self.link_dialog.is_some()
    }

    /// Current link dialog URL text, when open
    pub fn link_dialog_url(&self) -> Option<&str> {
        self.link_dialog.as_ref().map(|d| d.url())
    }

    /// Replace the link dialog URL (bound to the dialog input field)
    pub fn link_dialog_input(&mut self, url: &str) {
        if let Some(dialog) = &mut self.link_dialog {
            dialog.set_url(url);
        }
    }

    // ---- pickers ----

    /// Open the mention picker from the toolbar
    ///
    /// Closes the emoji picker first. Returns the search to resolve, or
    /// `None` when mentions are disabled.
    pub fn open_mention_picker(&mut self) -> Option<MentionSearch> {
        if !self.editable() || !self.options.enable_mentions {
            return None;
        }
        self.close_emoji();
        let token = self.next_token();
        let search = self.mention.open(token, None);
        self.emit(ComposerEvent::PickerOpened(PickerKind::Mention));
        Some(search)
    }

    /// Resolve a mention search outcome
    ///
    /// Results for a stale token, or for a picker that closed in the
    /// meantime, are discarded. Provider failure resolves to an empty
    /// picker; nothing surfaces on the document.
    pub fn complete_mention_search(
        &mut self,
        token: u64,
        result: ComposerResult<Vec<MentionUser>>,
    ) {
        if !self.mention.is_open() || token != self.mention.token() {
            debug!(token, "discarding stale mention search result");
            return;
        }
        match result {
            Ok(results) => self.mention.resolve(results),
            Err(e) => {
                warn!(error = %e, "mention search failed");
                self.mention.resolve(Vec::new());
            }
        }
    }

    /// Resolve a search against the configured mention provider
    ///
    /// Convenience over the split-phase API for single-loop callers. A
    /// missing provider resolves to an empty picker.
    pub async fn refresh_mentions(&mut self, search: MentionSearch) {
        let result = match self.collaborators.mentions.clone() {
            Some(provider) => provider.search(&search.query).await,
            None => Ok(Vec::new()),
        };
        self.complete_mention_search(search.token, result);
    }

    /// Insert text and resolve any triggered mention search in one call
    pub async fn type_text(&mut self, text: &str) {
        if let Some(search) = self.insert_text(text) {
            self.refresh_mentions(search).await;
        }
    }

    /// Insert the selected mention as `@username ` and close the picker
    pub fn select_mention(&mut self, user: &MentionUser) {
        if !self.mention.is_open() {
            return;
        }
        let insert = format!("@{} ", user.username);
        match self.mention.trigger_start() {
            // Replace the typed `@query` span with the canonical form; if
            // the buffer was rewritten underneath the anchor, the span no
            // longer exists and the mention goes in at the caret instead
            Some(start) => {
                let end = start + 1 + self.mention.query().len();
                let markup = self.surface.read_content().markup;
                let span_valid = end <= markup.len()
                    && markup.is_char_boundary(start)
                    && markup.is_char_boundary(end);
                if span_valid {
                    self.surface.replace_range(start..end, &insert);
                } else {
                    self.surface.insert_text(&insert);
                }
            }
            None => self.surface.insert_text(&insert),
        }
        self.close_mention();
        self.focus();
        self.after_user_mutation();
    }

    /// Open the emoji picker from the toolbar, closing the mention picker
    pub fn open_emoji_picker(&mut self) {
        if !self.editable() || !self.options.enable_emoji {
            return;
        }
        self.close_mention();
        self.emoji.open();
        self.emit(ComposerEvent::PickerOpened(PickerKind::Emoji));
    }

    /// Update the emoji picker query
    pub fn set_emoji_query(&mut self, query: &str) {
        if self.emoji.is_open() {
            self.emoji.set_query(query);
        }
    }

    /// Switch the emoji category; only effective while the query is empty
    pub fn select_emoji_category(&mut self, category: EmojiCategory) {
        if self.emoji.is_open() {
            self.emoji.select_category(category);
        }
    }

    /// Insert the selected emoji glyph and close the picker
    pub fn select_emoji(&mut self, symbol: &str) {
        if !self.emoji.is_open() {
            return;
        }
        self.surface.insert_text(symbol);
        self.close_emoji();
        self.focus();
        self.after_user_mutation();
    }

    /// Close any open picker (the Escape path)
    pub fn close_pickers(&mut self) {
        self.close_mention();
        self.close_emoji();
    }

    fn close_mention(&mut self) {
        if self.mention.is_open() {
            self.mention.close();
            self.emit(ComposerEvent::PickerClosed(PickerKind::Mention));
        }
    }

    fn close_emoji(&mut self) {
        if self.emoji.is_open() {
            self.emoji.close();
            self.emit(ComposerEvent::PickerClosed(PickerKind::Emoji));
        }
    }

    // ---- media ----

    /// Media uploader handle, for UI layers running the upload themselves
    pub fn media_uploader(&self) -> Option<Arc<dyn MediaUploader>> {
        self.collaborators.media.clone()
    }

    /// Upload a file and insert the resulting image URL
    ///
    /// Rejection is logged and aborts only this insertion.
    pub async fn upload_and_insert(&mut self, file: MediaFile) {
        if !self.editable() || !self.options.enable_media {
            return;
        }
        let Some(uploader) = self.collaborators.media.clone() else {
            debug!("no media uploader configured");
            return;
        };
        match uploader.upload(file).await {
            Ok(url) => self.dispatch(CommandId::InsertImage, Some(&url)),
            Err(e) => warn!(error = %e, "media upload failed; insertion aborted"),
        }
    }

    // ---- controlled mode ----

    /// Apply an externally controlled value
    ///
    /// Marks the engine controlled and overwrites the surface when the
    /// value differs from the last content seen, guarding against echo
    /// loops. External writes do not emit `ContentChanged` and do not
    /// re-arm autosave; the change contract covers user-driven mutations.
    pub fn set_controlled_value(&mut self, value: &str) {
        self.is_controlled = true;
        if self.options.disabled || self.options.read_only {
            return;
        }
        if self.sync.reconcile(value, &mut self.surface) {
            // Byte offsets anchored before the rewrite are now meaningless
            self.close_pickers();
            self.counts = counters::count(&self.surface.read_content().text);
        }
    }

    /// Stop the autosave scheduler; pending timers never fire afterwards
    pub fn shutdown(&mut self) {
        if let Some(autosave) = self.autosave.take() {
            autosave.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ComposerEngine {
        ComposerEngine::new(ComposerOptions::default(), Collaborators::new())
    }

    #[test]
    fn test_unknown_command_is_inert() {
        let mut engine = engine();
        engine.insert_text("hello");
        engine.dispatch_named("definitely-not-a-command", None);
        assert_eq!(engine.state().plain_text, "hello");
    }

    #[test]
    fn test_disabled_engine_ignores_everything() {
        let options = ComposerOptions {
            disabled: true,
            ..Default::default()
        };
        let mut engine = ComposerEngine::new(options, Collaborators::new());
        assert!(engine.insert_text("x").is_none());
        engine.dispatch(CommandId::Bold, None);
        engine.open_emoji_picker();
        assert_eq!(engine.state().plain_text, "");
        assert!(!engine.emoji_picker().is_open());
    }

    #[test]
    fn test_dispatch_acquires_focus() {
        let mut engine = engine();
        assert!(!engine.surface().is_focused());
        engine.dispatch(CommandId::Bold, None);
        assert!(engine.surface().is_focused());
    }

    #[test]
    fn test_default_value_seeds_content_and_counts() {
        let options = ComposerOptions {
            default_value: Some("<strong>Hi</strong> there".to_string()),
            ..Default::default()
        };
        let engine = ComposerEngine::new(options, Collaborators::new());
        assert_eq!(engine.state().plain_text, "Hi there");
        assert_eq!(engine.counts().characters, 8);
        assert_eq!(engine.counts().words, 2);
    }

    #[test]
    fn test_empty_link_url_never_dispatches() {
        let mut engine = engine();
        engine.dispatch(CommandId::CreateLink, Some("   "));
        engine.dispatch(CommandId::CreateLink, None);
        assert_eq!(engine.state().raw_markup, "");
    }

    #[test]
    fn test_mutation_emits_exactly_one_change_event() {
        let mut engine = engine();
        let mut rx = engine.subscribe();
        engine.insert_text("a");
        let mut changes = 0;
        while let Ok(event) = rx.try_recv() {
            if matches!(event, ComposerEvent::ContentChanged { .. }) {
                changes += 1;
            }
        }
        assert_eq!(changes, 1);
    }

    #[test]
    fn test_undo_on_empty_history_emits_nothing() {
        let mut engine = engine();
        let mut rx = engine.subscribe();
        engine.dispatch(CommandId::Undo, None);
        while let Ok(event) = rx.try_recv() {
            assert!(
                !matches!(event, ComposerEvent::ContentChanged { .. }),
                "no-op undo must not report a change"
            );
        }
    }
}
