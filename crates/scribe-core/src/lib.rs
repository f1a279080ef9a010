//! Scribe Core Library
//!
//! Headless rich-text composer engine for a consumer social platform.
//!
//! ## Overview
//!
//! Scribe manages a live editable document as explicit state machines
//! instead of leaning on an ambient platform formatting API: a markup
//! buffer behind an abstract surface trait, a fixed command registry,
//! trigger-based mention/emoji pickers, a debounced autosave scheduler,
//! and reconciliation of externally controlled content against live
//! edits.
//!
//! ## Core principles
//!
//! - **Headless-first**: the engine has no UI dependency; platform
//!   adapters implement [`DocumentSurface`] and subscribe to events
//! - **No ambient APIs**: every command is a tagged registry entry with a
//!   pure mutation over the document buffer
//! - **Failures stay off the document**: collaborator errors resolve to
//!   empty pickers or a transient autosave status, never exceptions
//!
//! ## Quick Start
//!
//! ```ignore
//! use scribe_core::{Collaborators, CommandId, ComposerEngine, ComposerOptions};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut engine = ComposerEngine::new(ComposerOptions::default(), Collaborators::new());
//!
//!     engine.insert_text("Hello world");
//!     engine.dispatch(CommandId::Bold, None);
//!
//!     // Trigger the mention picker and resolve it against the provider
//!     engine.type_text("@").await;
//!
//!     let state = engine.state();
//!     println!("{} ({} chars)", state.plain_text, engine.counts().characters);
//! }
//! ```

pub mod autosave;
pub mod commands;
pub mod config;
pub mod counters;
pub mod emoji;
pub mod engine;
pub mod error;
pub mod events;
pub mod picker;
pub mod providers;
pub mod surface;
pub mod sync;
pub mod types;

// Re-exports
pub use autosave::{AutosaveHandle, ERROR_DISPLAY_WINDOW, SAVED_DISPLAY_WINDOW};
pub use commands::{
    registry, shortcut_action, CommandDescriptor, CommandId, Key, KeyInput, LinkDialog, Shortcut,
    ShortcutAction,
};
pub use config::{ComposerOptions, Size, Variant};
pub use counters::{char_count_display, count, CharCountDisplay, ContentCounts};
pub use emoji::{EmojiCategory, EmojiEntry, CATALOG};
pub use engine::ComposerEngine;
pub use error::{ComposerError, ComposerResult};
pub use events::{AutosaveStatus, ComposerEvent};
pub use picker::{EmojiPickerState, MentionPickerState, MentionSearch, PickerKind, PickerPhase};
pub use providers::{Collaborators, MediaUploader, MentionProvider, PersistenceSink};
pub use surface::{
    strip_markup, BlockFormat, BufferSurface, DocumentSurface, InlineStyle, SurfaceContent,
};
pub use sync::SyncController;
pub use types::{EditorState, MediaFile, MentionUser};
