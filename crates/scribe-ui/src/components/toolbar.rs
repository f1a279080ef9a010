//! Composer Toolbar
//!
//! Formatting buttons generated from the command registry, picker
//! triggers, and the inline link and image prompts.

use dioxus::prelude::*;
use scribe_core::{registry, CommandId, Key as EngineKey, KeyInput, MediaFile};

use crate::context::{use_composer, use_composer_view, ComposerView};

/// Glyph shown on each toolbar button
fn button_glyph(id: CommandId) -> &'static str {
    match id {
        CommandId::Bold => "B",
        CommandId::Italic => "I",
        CommandId::Underline => "U",
        CommandId::Strikethrough => "S",
        CommandId::Heading1 => "H1",
        CommandId::Heading2 => "H2",
        CommandId::Heading3 => "H3",
        CommandId::Paragraph => "¶",
        CommandId::UnorderedList => "•≡",
        CommandId::OrderedList => "1≡",
        CommandId::Quote => "❝",
        CommandId::CodeBlock => "</>",
        CommandId::AlignLeft => "⇤",
        CommandId::AlignCenter => "⇔",
        CommandId::AlignRight => "⇥",
        CommandId::AlignJustify => "☰",
        CommandId::CreateLink => "🔗",
        CommandId::InsertImage => "🖼",
        CommandId::Undo => "↶",
        CommandId::Redo => "↷",
    }
}

/// Toolbar over the command registry
///
/// `CreateLink` opens the two-phase dialog and `InsertImage` opens the
/// file prompt instead of dispatching directly; every other button
/// dispatches its command id. The image button only renders when an
/// uploader is wired in, since there is nowhere to send the file
/// otherwise.
#[component]
pub fn Toolbar() -> Element {
    let engine = use_composer();
    let mut view = use_composer_view();
    let mut image_prompt = use_signal(|| None::<String>);

    let can_insert_media = view().can_insert_media;
    let commands: Vec<_> = registry()
        .into_iter()
        .filter(|d| d.id != CommandId::InsertImage || can_insert_media)
        .collect();

    let open_mentions = move |_| {
        spawn(async move {
            let shared = engine();
            let mut guard = shared.lock().await;
            if let Some(search) = guard.open_mention_picker() {
                guard.refresh_mentions(search).await;
            }
            view.set(ComposerView::capture(&guard));
        });
    };

    let open_emoji = move |_| {
        spawn(async move {
            let shared = engine();
            let mut guard = shared.lock().await;
            guard.open_emoji_picker();
            view.set(ComposerView::capture(&guard));
        });
    };

    rsx! {
        div { class: "composer-toolbar", role: "toolbar",
            for descriptor in commands {
                {
                    let id = descriptor.id;
                    let title = match descriptor.shortcut {
                        Some(shortcut) => format!("{} ({})", descriptor.label, shortcut),
                        None => descriptor.label.to_string(),
                    };
                    rsx! {
                        button {
                            key: "{id.as_str()}",
                            class: "toolbar-btn",
                            title: "{title}",
                            "aria-label": "{descriptor.label}",
                            onclick: move |_| {
                                if id == CommandId::InsertImage {
                                    image_prompt.set(Some(String::new()));
                                    return;
                                }
                                spawn(async move {
                                    let shared = engine();
                                    let mut guard = shared.lock().await;
                                    if id == CommandId::CreateLink {
                                        guard.open_link_dialog();
                                    } else {
                                        guard.dispatch(id, None);
                                    }
                                    view.set(ComposerView::capture(&guard));
                                });
                            },
                            "{button_glyph(id)}"
                        }
                    }
                }
            }

            div { class: "toolbar-spacer" }

            button {
                class: "toolbar-btn",
                title: "Mention someone",
                onclick: open_mentions,
                "@"
            }
            button {
                class: "toolbar-btn",
                title: "Insert emoji",
                onclick: open_emoji,
                "🙂"
            }
        }

        if view().link_dialog.is_some() {
            LinkPrompt {}
        }
        if image_prompt().is_some() {
            ImagePrompt { path: image_prompt }
        }
    }
}

/// Inline file prompt behind the image toolbar button
///
/// The named file is read off the event loop and handed to the engine,
/// which uploads it and inserts the returned URL. Enter attaches,
/// Escape cancels.
#[component]
pub fn ImagePrompt(path: Signal<Option<String>>) -> Element {
    let engine = use_composer();
    let mut view = use_composer_view();
    let mut path = path;

    let value = path().unwrap_or_default();

    let submit = move || {
        let Some(picked) = path() else { return };
        path.set(None);
        let picked = picked.trim().to_string();
        if picked.is_empty() {
            return;
        }
        spawn(async move {
            let bytes = match tokio::fs::read(&picked).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(error = %e, path = %picked, "could not read image file");
                    return;
                }
            };
            let name = std::path::Path::new(&picked)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("image")
                .to_string();
            let mime = mime_for(&name);
            let shared = engine();
            let mut guard = shared.lock().await;
            guard.upload_and_insert(MediaFile { name, mime, bytes }).await;
            view.set(ComposerView::capture(&guard));
        });
    };

    rsx! {
        div { class: "link-dialog",
            input {
                class: "link-dialog-input",
                value: "{value}",
                placeholder: "/path/to/image.png",
                oninput: move |e| path.set(Some(e.value())),
                onkeydown: move |e: KeyboardEvent| match e.key() {
                    Key::Enter => {
                        e.prevent_default();
                        submit();
                    }
                    Key::Escape => {
                        e.prevent_default();
                        path.set(None);
                    }
                    _ => {}
                },
                autofocus: true,
            }
            button { class: "link-dialog-btn", onclick: move |_| submit(), "Attach" }
            button {
                class: "link-dialog-btn link-dialog-btn--cancel",
                onclick: move |_| path.set(None),
                "Cancel"
            }
        }
    }
}

/// MIME type from the file extension, best effort
fn mime_for(name: &str) -> String {
    let ext = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_follows_extension() {
        assert_eq!(mime_for("pic.PNG"), "image/png");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("archive.bin"), "application/octet-stream");
        assert_eq!(mime_for("noext"), "application/octet-stream");
    }
}

/// Inline link prompt, phase two of `CreateLink`
///
/// Enter submits through the engine (an empty or whitespace URL closes
/// without dispatching), Escape cancels.
#[component]
pub fn LinkPrompt() -> Element {
    let engine = use_composer();
    let mut view = use_composer_view();

    let url = view().link_dialog.unwrap_or_default();

    let oninput = move |e: FormEvent| {
        let value = e.value();
        spawn(async move {
            let shared = engine();
            let mut guard = shared.lock().await;
            guard.link_dialog_input(&value);
            view.set(ComposerView::capture(&guard));
        });
    };

    let onkeydown = move |e: KeyboardEvent| {
        let key = match e.key() {
            Key::Enter => EngineKey::Enter,
            Key::Escape => EngineKey::Escape,
            _ => return,
        };
        e.prevent_default();
        spawn(async move {
            let shared = engine();
            let mut guard = shared.lock().await;
            guard.handle_key(KeyInput::named(key));
            view.set(ComposerView::capture(&guard));
        });
    };

    let submit = move |_| {
        spawn(async move {
            let shared = engine();
            let mut guard = shared.lock().await;
            guard.handle_key(KeyInput::named(EngineKey::Enter));
            view.set(ComposerView::capture(&guard));
        });
    };

    let cancel = move |_| {
        spawn(async move {
            let shared = engine();
            let mut guard = shared.lock().await;
            guard.handle_key(KeyInput::named(EngineKey::Escape));
            view.set(ComposerView::capture(&guard));
        });
    };

    rsx! {
        div { class: "link-dialog",
            input {
                class: "link-dialog-input",
                r#type: "url",
                value: "{url}",
                placeholder: "https://...",
                oninput: oninput,
                onkeydown: onkeydown,
                autofocus: true,
            }
            button { class: "link-dialog-btn", onclick: submit, "Add link" }
            button { class: "link-dialog-btn link-dialog-btn--cancel", onclick: cancel, "Cancel" }
        }
    }
}
