//! Scribe UI Components
//!
//! Dioxus components over the headless `scribe-core` composer engine.
//!
//! ## Architecture
//!
//! The engine lives behind `Arc<Mutex<..>>` in context; components never
//! mutate it directly from render. Event handlers spawn a task, lock the
//! engine, apply the mutation, and publish a fresh [`ComposerView`]
//! snapshot that all child components render from.
//!
//! ## Components
//!
//! - [`Composer`]: the root editor (textarea, toolbar, overlays, footer)
//! - [`Toolbar`]: formatting buttons driven by the command registry
//! - [`MentionOverlay`] / [`EmojiOverlay`]: picker dropdowns
//! - [`ComposerFooter`]: counters and autosave status

pub mod components;
pub mod context;

pub use components::*;
pub use context::{use_composer, use_composer_view, ComposerView, SharedComposer};
