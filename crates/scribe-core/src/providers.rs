//! Async collaborator traits consumed by the engine
//!
//! The engine never performs I/O itself; search, upload, and persistence
//! are injected behind object-safe traits returning boxed futures. Every
//! failure is caught at the call site: search failures yield an empty
//! result set, upload failures abort only that insertion, persistence
//! failures drive the autosave status to `Error`.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::ComposerResult;
use crate::types::{MediaFile, MentionUser};

/// Searches users for the mention picker
///
/// Must tolerate empty-string queries and empty results without erroring.
pub trait MentionProvider: Send + Sync {
    fn search(&self, query: &str) -> BoxFuture<'static, ComposerResult<Vec<MentionUser>>>;
}

/// Uploads a media file and returns its URL
pub trait MediaUploader: Send + Sync {
    fn upload(&self, file: MediaFile) -> BoxFuture<'static, ComposerResult<String>>;
}

/// Persists content for the autosave scheduler
pub trait PersistenceSink: Send + Sync {
    fn persist(&self, content: String) -> BoxFuture<'static, ComposerResult<()>>;
}

/// The collaborators wired into an engine at construction
///
/// All optional; a missing provider disables the corresponding feature
/// path (mention search resolves empty, uploads are rejected locally,
/// autosave never spawns).
#[derive(Default, Clone)]
pub struct Collaborators {
    pub mentions: Option<Arc<dyn MentionProvider>>,
    pub media: Option<Arc<dyn MediaUploader>>,
    pub persistence: Option<Arc<dyn PersistenceSink>>,
}

impl Collaborators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mentions(mut self, provider: Arc<dyn MentionProvider>) -> Self {
        self.mentions = Some(provider);
        self
    }

    pub fn with_media(mut self, uploader: Arc<dyn MediaUploader>) -> Self {
        self.media = Some(uploader);
        self
    }

    pub fn with_persistence(mut self, sink: Arc<dyn PersistenceSink>) -> Self {
        self.persistence = Some(sink);
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("mentions", &self.mentions.is_some())
            .field("media", &self.media.is_some())
            .field("persistence", &self.persistence.is_some())
            .finish()
    }
}
