//! Desktop application shell
//!
//! Builds the composer engine with demo collaborators (an in-memory user
//! directory, a local media uploader, and a draft file persistence sink)
//! and mounts the Composer component tree.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use dioxus::prelude::*;
use futures::future::BoxFuture;
use scribe_core::{
    Collaborators, ComposerEngine, ComposerError, ComposerOptions, ComposerResult, MediaFile,
    MediaUploader, MentionProvider, MentionUser, PersistenceSink,
};
use scribe_ui::{Composer, SharedComposer};
use tokio::sync::Mutex;

use crate::get_data_dir;
use crate::theme::GLOBAL_STYLES;

/// Options resolved from the command line before launch
#[derive(Debug, Clone, Copy)]
pub struct LaunchOptions {
    pub autosave: bool,
    pub autosave_ms: u64,
}

pub static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

/// In-memory user directory for mention suggestions
struct DirectoryMentions {
    users: Vec<MentionUser>,
}

impl DirectoryMentions {
    fn demo() -> Self {
        Self {
            users: vec![
                MentionUser::new("1", "ana", "Ana Silva"),
                MentionUser::new("2", "ben", "Ben Okafor"),
                MentionUser::new("3", "carla", "Carla Reyes"),
                MentionUser::new("4", "dev", "Devi Narayan"),
                MentionUser::new("5", "elio", "Elio Marchetti"),
            ],
        }
    }
}

impl MentionProvider for DirectoryMentions {
    fn search(&self, query: &str) -> BoxFuture<'static, ComposerResult<Vec<MentionUser>>> {
        let needle = query.to_lowercase();
        let matches: Vec<MentionUser> = self
            .users
            .iter()
            .filter(|u| {
                u.username.to_lowercase().contains(&needle)
                    || u.display_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        Box::pin(async move { Ok(matches) })
    }
}

/// Copies uploaded media into the data directory and hands back a file URL
struct LocalMediaStore {
    dir: PathBuf,
}

impl MediaUploader for LocalMediaStore {
    fn upload(&self, file: MediaFile) -> BoxFuture<'static, ComposerResult<String>> {
        let path = self.dir.join(&file.name);
        Box::pin(async move {
            tokio::fs::create_dir_all(path.parent().unwrap_or(&path))
                .await
                .map_err(|e| ComposerError::MediaUpload(e.to_string()))?;
            tokio::fs::write(&path, &file.bytes)
                .await
                .map_err(|e| ComposerError::MediaUpload(e.to_string()))?;
            Ok(format!("file://{}", path.display()))
        })
    }
}

/// Persists the current draft markup to a file in the data directory
struct DraftFile {
    path: PathBuf,
}

impl PersistenceSink for DraftFile {
    fn persist(&self, content: String) -> BoxFuture<'static, ComposerResult<()>> {
        let path = self.path.clone();
        Box::pin(async move {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ComposerError::Persistence(e.to_string()))?;
            }
            tokio::fs::write(&path, content)
                .await
                .map_err(|e| ComposerError::Persistence(e.to_string()))?;
            tracing::debug!(?path, "draft persisted");
            Ok(())
        })
    }
}

fn build_engine() -> ComposerEngine {
    let launch = LAUNCH_OPTIONS.get().copied().unwrap_or(LaunchOptions {
        autosave: true,
        autosave_ms: 3000,
    });
    let data_dir = get_data_dir();

    let options = ComposerOptions {
        placeholder: "What's on your mind?".to_string(),
        show_char_count: true,
        max_length: Some(5000),
        show_word_count: true,
        auto_save: launch.autosave,
        auto_save_interval: Duration::from_millis(launch.autosave_ms),
        ..Default::default()
    };

    let collaborators = Collaborators::new()
        .with_mentions(Arc::new(DirectoryMentions::demo()))
        .with_media(Arc::new(LocalMediaStore {
            dir: data_dir.join("media"),
        }))
        .with_persistence(Arc::new(DraftFile {
            path: data_dir.join("draft.html"),
        }));

    ComposerEngine::new(options, collaborators)
}

/// Root application component
///
/// The engine is created inside a spawned task so the autosave scheduler
/// lands on the runtime, then provided to the component tree.
#[component]
pub fn App() -> Element {
    let mut composer: Signal<Option<SharedComposer>> = use_signal(|| None);

    use_effect(move || {
        spawn(async move {
            let engine = build_engine();
            composer.set(Some(Arc::new(Mutex::new(engine))));
            tracing::info!("composer engine initialized");
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app",
            h1 { class: "app-title", "Scribe" }
            match composer() {
                Some(shared) => rsx! {
                    ComposerRoot { shared }
                },
                None => rsx! {
                    div { class: "app-loading", "preparing composer..." }
                },
            }
        }
    }
}

#[derive(Props, Clone)]
struct ComposerRootProps {
    shared: SharedComposer,
}

impl PartialEq for ComposerRootProps {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

fn ComposerRoot(props: ComposerRootProps) -> Element {
    use_context_provider(|| Signal::new(props.shared.clone()));
    rsx! {
        Composer {}
    }
}
