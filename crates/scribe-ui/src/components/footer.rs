//! Composer Footer
//!
//! Character/word counters and the transient autosave status line.

use dioxus::prelude::*;
use scribe_core::AutosaveStatus;

use crate::context::use_composer_view;

/// Status footer under the editing surface
///
/// Counter visibility follows the engine options captured into the view;
/// the autosave label renders only while the scheduler is not idle.
#[component]
pub fn ComposerFooter() -> Element {
    let view = use_composer_view();
    let snapshot = view();

    let autosave_class = match snapshot.autosave {
        AutosaveStatus::Error => "autosave-status autosave-status--error",
        _ => "autosave-status",
    };

    rsx! {
        div { class: "composer-footer",
            if let Some(display) = snapshot.char_display.as_ref() {
                span {
                    class: if display.over_limit { "char-count char-count--over" } else { "char-count" },
                    "{display.text}"
                }
            }

            if snapshot.show_word_count {
                span { class: "word-count",
                    if snapshot.counts.words == 1 {
                        "1 word"
                    } else {
                        "{snapshot.counts.words} words"
                    }
                }
            }

            div { class: "footer-spacer" }

            if snapshot.autosave != AutosaveStatus::Idle {
                span { class: autosave_class, "{snapshot.autosave}" }
            }
        }
    }
}
