//! Picker Overlays
//!
//! Dropdown overlays for the mention and emoji pickers, rendered from the
//! snapshot phases so loading/empty/ready states present consistently.

use dioxus::prelude::*;
use scribe_core::{EmojiCategory, MentionUser, PickerPhase};

use crate::context::{use_composer, use_composer_view, ComposerView};

/// Mention suggestion dropdown
///
/// Phases render as: Loading → spinner row, Empty → "no matches",
/// Ready → selectable user rows.
#[component]
pub fn MentionOverlay() -> Element {
    let view = use_composer_view();
    let snapshot = view();

    rsx! {
        div { class: "picker-overlay mention-overlay", role: "listbox",
            match snapshot.mention_phase {
                PickerPhase::Loading => rsx! {
                    div { class: "picker-status", "searching..." }
                },
                PickerPhase::Empty => rsx! {
                    div { class: "picker-status",
                        if snapshot.mention_query.is_empty() {
                            "no people found"
                        } else {
                            "no matches for \"{snapshot.mention_query}\""
                        }
                    }
                },
                PickerPhase::Ready => rsx! {
                    for user in snapshot.mention_results.iter() {
                        MentionRow { key: "{user.id}", user: user.clone() }
                    }
                },
                PickerPhase::Closed => rsx! {},
            }
        }
    }
}

/// A single selectable row in the mention dropdown
#[component]
fn MentionRow(user: MentionUser) -> Element {
    let engine = use_composer();
    let mut view = use_composer_view();
    let selected = user.clone();

    rsx! {
        button {
            class: "mention-row",
            role: "option",
            onclick: move |_| {
                let user = selected.clone();
                spawn(async move {
                    let shared = engine();
                    let mut guard = shared.lock().await;
                    guard.select_mention(&user);
                    view.set(ComposerView::capture(&guard));
                });
            },
            if let Some(avatar) = user.avatar.as_ref() {
                img { class: "mention-avatar", src: "{avatar}", alt: "" }
            }
            span { class: "mention-name", "{user.display_name}" }
            span { class: "mention-username", "@{user.username}" }
        }
    }
}

/// Emoji picker dropdown with category pills and a search field
#[component]
pub fn EmojiOverlay() -> Element {
    let engine = use_composer();
    let mut view = use_composer_view();

    let snapshot = view();
    let searching = !snapshot.emoji_query.trim().is_empty();

    let oninput = move |e: FormEvent| {
        let value = e.value();
        spawn(async move {
            let shared = engine();
            let mut guard = shared.lock().await;
            guard.set_emoji_query(&value);
            view.set(ComposerView::capture(&guard));
        });
    };

    rsx! {
        div { class: "picker-overlay emoji-overlay",
            input {
                class: "emoji-search",
                r#type: "search",
                value: "{snapshot.emoji_query}",
                placeholder: "Search emoji...",
                oninput: oninput,
            }

            // Category pills are inert while a search query is active;
            // searching spans all categories
            div {
                class: if searching { "emoji-categories emoji-categories--inactive" } else { "emoji-categories" },
                role: "radiogroup",
                for category in EmojiCategory::ALL {
                    {
                        let selected = !searching && snapshot.emoji_category == category;
                        rsx! {
                            button {
                                key: "{category.label()}",
                                class: if selected { "pill selected" } else { "pill" },
                                role: "radio",
                                "aria-checked": if selected { "true" } else { "false" },
                                onclick: move |_| {
                                    spawn(async move {
                                        let shared = engine();
                                        let mut guard = shared.lock().await;
                                        guard.select_emoji_category(category);
                                        view.set(ComposerView::capture(&guard));
                                    });
                                },
                                "{category.label()}"
                            }
                        }
                    }
                }
            }

            div { class: "emoji-grid",
                if snapshot.emoji_results.is_empty() {
                    div { class: "picker-status", "no emoji match" }
                }
                for entry in snapshot.emoji_results.iter() {
                    {
                        let symbol = entry.symbol;
                        rsx! {
                            button {
                                key: "{entry.name}",
                                class: "emoji-cell",
                                title: "{entry.name}",
                                onclick: move |_| {
                                    spawn(async move {
                                        let shared = engine();
                                        let mut guard = shared.lock().await;
                                        guard.select_emoji(symbol);
                                        view.set(ComposerView::capture(&guard));
                                    });
                                },
                                "{entry.symbol}"
                            }
                        }
                    }
                }
            }
        }
    }
}
