//! Derived character and word counts for the status footer
//!
//! Recomputed synchronously on every mutation; display-only, never
//! persisted. `max_length` is a display threshold, not a hard limit:
//! content past it is flagged, never truncated.

use serde::Serialize;

/// Counts derived from the current plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ContentCounts {
    /// Unicode scalar count of the plain text
    pub characters: usize,
    /// Whitespace-delimited tokens in the trimmed plain text; empty or
    /// whitespace-only content counts zero words
    pub words: usize,
}

/// Compute counts from plain text
pub fn count(text: &str) -> ContentCounts {
    ContentCounts {
        characters: text.chars().count(),
        words: text.split_whitespace().count(),
    }
}

/// Footer rendering of the character count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharCountDisplay {
    /// e.g. `"11 / 5 characters"` or `"11 characters"`
    pub text: String,
    /// True when a max is configured and the count exceeds it
    pub over_limit: bool,
}

/// Format the character count against an optional display threshold
pub fn char_count_display(counts: ContentCounts, max_length: Option<usize>) -> CharCountDisplay {
    match max_length {
        Some(max) => CharCountDisplay {
            text: format!("{} / {} characters", counts.characters, max),
            over_limit: counts.characters > max,
        },
        None => CharCountDisplay {
            text: format!("{} characters", counts.characters),
            over_limit: false,
        },
    }
}
