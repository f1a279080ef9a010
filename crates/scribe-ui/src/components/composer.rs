//! Root Composer Component
//!
//! Binds a textarea to the engine's markup buffer, routes keyboard
//! shortcuts, and mounts the toolbar, picker overlays, and footer.

use dioxus::prelude::*;
use scribe_core::{ComposerEngine, Key as EngineKey, KeyInput, MentionSearch, PickerPhase};
use tokio::sync::broadcast::error::RecvError;

use crate::components::{ComposerFooter, EmojiOverlay, MentionOverlay, Toolbar};
use crate::context::{use_composer, ComposerView};

/// Map a whole-value textarea update onto engine primitives
///
/// The textarea reports the full new value; the engine wants granular
/// edits so trigger detection and the mention query stay accurate. A
/// single trailing deletion becomes `delete_backward`, everything else
/// becomes a selection replace, diffed by common prefix and suffix.
pub fn apply_textarea_edit(
    engine: &mut ComposerEngine,
    previous: &str,
    current: &str,
) -> Option<MentionSearch> {
    if previous == current {
        return None;
    }

    let prefix = previous
        .char_indices()
        .zip(current.char_indices())
        .take_while(|((_, a), (_, b))| a == b)
        .last()
        .map(|((i, a), _)| i + a.len_utf8())
        .unwrap_or(0);
    let max_suffix = previous.len().min(current.len()) - prefix;
    let suffix = previous
        .chars()
        .rev()
        .zip(current.chars().rev())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .scan(0, |acc, w| {
            *acc += w;
            Some(*acc)
        })
        .take_while(|&total| total <= max_suffix)
        .last()
        .unwrap_or(0);

    let removed = prefix..previous.len() - suffix;
    let inserted = &current[prefix..current.len() - suffix];

    let single_char_removed = previous[removed.clone()].chars().count() == 1;
    if inserted.is_empty() && single_char_removed {
        engine.surface_mut().set_selection(removed.end..removed.end);
        return engine.delete_backward();
    }

    engine.surface_mut().set_selection(removed);
    engine.insert_text(inserted)
}

/// Root composer: textarea, toolbar, overlays, footer
#[component]
pub fn Composer() -> Element {
    let engine = use_composer();
    let mut view = use_context_provider(|| Signal::new(ComposerView::default()));

    // Seed the snapshot and follow engine notifications (autosave status
    // reverts on its own timers, so render state cannot be handler-driven
    // alone)
    use_effect(move || {
        spawn(async move {
            let shared = engine();
            let mut rx = {
                let guard = shared.lock().await;
                view.set(ComposerView::capture(&guard));
                guard.subscribe()
            };
            loop {
                match rx.recv().await {
                    Ok(_) => {
                        let guard = shared.lock().await;
                        view.set(ComposerView::capture(&guard));
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "composer view lagged behind engine events");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });

    let oninput = move |e: FormEvent| {
        let value = e.value();
        spawn(async move {
            let shared = engine();
            let mut guard = shared.lock().await;
            let previous = guard.state().raw_markup;
            if let Some(search) = apply_textarea_edit(&mut guard, &previous, &value) {
                guard.refresh_mentions(search).await;
            }
            view.set(ComposerView::capture(&guard));
        });
    };

    // Only chords and Escape are intercepted; plain typing arrives via
    // oninput with the full value
    let onkeydown = move |e: KeyboardEvent| {
        let input = match e.key() {
            dioxus::prelude::Key::Escape => Some(KeyInput::named(EngineKey::Escape)),
            dioxus::prelude::Key::Character(s) if e.modifiers().ctrl() => {
                s.chars().next().map(|c| {
                    if e.modifiers().shift() {
                        KeyInput::ctrl_shift(c.to_ascii_lowercase())
                    } else {
                        KeyInput::ctrl(c.to_ascii_lowercase())
                    }
                })
            }
            _ => None,
        };
        let Some(input) = input else { return };
        e.prevent_default();
        spawn(async move {
            let shared = engine();
            let mut guard = shared.lock().await;
            if let Some(search) = guard.handle_key(input) {
                guard.refresh_mentions(search).await;
            }
            view.set(ComposerView::capture(&guard));
        });
    };

    let onfocus = move |_| {
        spawn(async move {
            let shared = engine();
            shared.lock().await.focus();
        });
    };

    let onblur = move |_| {
        spawn(async move {
            let shared = engine();
            shared.lock().await.blur();
        });
    };

    let mention_open = view().mention_phase != PickerPhase::Closed;
    let emoji_open = view().emoji_phase != PickerPhase::Closed;

    rsx! {
        div { class: "composer {view().style_class}",
            if view().show_toolbar {
                Toolbar {}
            }

            div { class: "composer-surface",
                textarea {
                    class: "composer-textarea",
                    value: "{view().markup}",
                    placeholder: "{view().placeholder}",
                    disabled: view().disabled,
                    readonly: view().read_only,
                    oninput: oninput,
                    onkeydown: onkeydown,
                    onfocus: onfocus,
                    onblur: onblur,
                    spellcheck: true,
                }

                if mention_open {
                    MentionOverlay {}
                }
                if emoji_open {
                    EmojiOverlay {}
                }
            }

            ComposerFooter {}
        }
    }
}
