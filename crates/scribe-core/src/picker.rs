//! Picker state machines for mention and emoji overlays
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Per-picker lifecycle                                      │
//! │                                                            │
//! │  Closed ── open ──▶ Loading ── results ──▶ Ready           │
//! │    ▲                   │                     │             │
//! │    │                   └── none/failure ──▶ Empty          │
//! │    └────────── select / Escape / other picker opens ───────┘
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! At most one of the two pickers is open at any time; the engine closes
//! the other before opening one. Every search carries a monotonically
//! increasing token, and resolutions whose token is no longer current are
//! discarded, so a slow early response can never clobber a later one.

use serde::Serialize;

use crate::emoji::{EmojiCategory, EmojiEntry};
use crate::types::MentionUser;

/// Which picker overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PickerKind {
    Mention,
    Emoji,
}

/// Overlay lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PickerPhase {
    #[default]
    Closed,
    /// Open, search in flight
    Loading,
    /// Open with at least one result
    Ready,
    /// Open, but the search returned nothing (or failed)
    Empty,
}

/// A search issued on behalf of the mention picker
///
/// The caller resolves it against the mention provider and feeds the
/// outcome back through `complete_mention_search` with the same token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionSearch {
    /// Token identifying this request; stale tokens are discarded
    pub token: u64,
    /// Query text at the time the search was issued
    pub query: String,
}

/// State of the mention picker
#[derive(Debug, Default)]
pub struct MentionPickerState {
    phase: PickerPhase,
    query: String,
    results: Vec<MentionUser>,
    token: u64,
    /// Byte offset of the `@` trigger in the markup, when opened by typing
    trigger_start: Option<usize>,
}

impl MentionPickerState {
    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != PickerPhase::Closed
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MentionUser] {
        &self.results
    }

    pub(crate) fn token(&self) -> u64 {
        self.token
    }

    pub(crate) fn trigger_start(&self) -> Option<usize> {
        self.trigger_start
    }

    /// Transition `Closed → Loading` and describe the search to run
    pub(crate) fn open(&mut self, token: u64, trigger_start: Option<usize>) -> MentionSearch {
        self.phase = PickerPhase::Loading;
        self.query.clear();
        self.results.clear();
        self.token = token;
        self.trigger_start = trigger_start;
        MentionSearch {
            token,
            query: String::new(),
        }
    }

    /// Extend the query with typed text and describe the refreshed search
    pub(crate) fn extend_query(&mut self, text: &str, token: u64) -> MentionSearch {
        self.query.push_str(text);
        self.phase = PickerPhase::Loading;
        self.token = token;
        MentionSearch {
            token,
            query: self.query.clone(),
        }
    }

    /// Drop the last query character; `None` means the picker should close
    pub(crate) fn shrink_query(&mut self, token: u64) -> Option<MentionSearch> {
        self.query.pop()?;
        self.phase = PickerPhase::Loading;
        self.token = token;
        Some(MentionSearch {
            token,
            query: self.query.clone(),
        })
    }

    /// Resolve a search; stale or late results for a closed picker are
    /// ignored by the caller before this is reached
    pub(crate) fn resolve(&mut self, results: Vec<MentionUser>) {
        self.results = results;
        self.phase = if self.results.is_empty() {
            PickerPhase::Empty
        } else {
            PickerPhase::Ready
        };
    }

    pub(crate) fn close(&mut self) {
        self.phase = PickerPhase::Closed;
        self.query.clear();
        self.results.clear();
        self.trigger_start = None;
    }
}

/// State of the emoji picker
///
/// Emoji listing resolves synchronously from the built-in catalog, but the
/// phases mirror the mention picker so both overlays present identically.
#[derive(Debug)]
pub struct EmojiPickerState {
    phase: PickerPhase,
    query: String,
    results: Vec<EmojiEntry>,
    category: EmojiCategory,
}

impl Default for EmojiPickerState {
    fn default() -> Self {
        Self {
            phase: PickerPhase::Closed,
            query: String::new(),
            results: Vec::new(),
            category: EmojiCategory::Smileys,
        }
    }
}

impl EmojiPickerState {
    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != PickerPhase::Closed
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[EmojiEntry] {
        &self.results
    }

    pub fn category(&self) -> EmojiCategory {
        self.category
    }

    pub(crate) fn open(&mut self) {
        self.query.clear();
        self.refresh();
    }

    pub(crate) fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refresh();
    }

    /// Category switching only has effect while the query is empty
    pub(crate) fn select_category(&mut self, category: EmojiCategory) {
        if !self.query.trim().is_empty() {
            return;
        }
        self.category = category;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.results = crate::emoji::filter(&self.query, self.category);
        self.phase = if self.results.is_empty() {
            PickerPhase::Empty
        } else {
            PickerPhase::Ready
        };
    }

    pub(crate) fn close(&mut self) {
        self.phase = PickerPhase::Closed;
        self.query.clear();
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_open_starts_loading_with_empty_query() {
        let mut picker = MentionPickerState::default();
        let search = picker.open(1, Some(4));
        assert_eq!(picker.phase(), PickerPhase::Loading);
        assert_eq!(search.query, "");
        assert_eq!(search.token, 1);
        assert_eq!(picker.trigger_start(), Some(4));
    }

    #[test]
    fn test_mention_resolve_ready_then_empty() {
        let mut picker = MentionPickerState::default();
        picker.open(1, None);
        picker.resolve(vec![MentionUser::new("1", "ana", "Ana")]);
        assert_eq!(picker.phase(), PickerPhase::Ready);
        picker.extend_query("zz", 2);
        picker.resolve(Vec::new());
        assert_eq!(picker.phase(), PickerPhase::Empty);
    }

    #[test]
    fn test_mention_shrink_past_empty_requests_close() {
        let mut picker = MentionPickerState::default();
        picker.open(1, Some(0));
        picker.extend_query("a", 2);
        assert!(picker.shrink_query(3).is_some());
        assert!(picker.shrink_query(4).is_none());
    }

    #[test]
    fn test_mention_close_clears_state() {
        let mut picker = MentionPickerState::default();
        picker.open(1, Some(2));
        picker.extend_query("an", 2);
        picker.resolve(vec![MentionUser::new("1", "ana", "Ana")]);
        picker.close();
        assert!(!picker.is_open());
        assert!(picker.query().is_empty());
        assert!(picker.results().is_empty());
        assert_eq!(picker.trigger_start(), None);
    }

    #[test]
    fn test_emoji_open_lists_default_category() {
        let mut picker = EmojiPickerState::default();
        picker.open();
        assert_eq!(picker.phase(), PickerPhase::Ready);
        assert_eq!(picker.category(), EmojiCategory::Smileys);
        assert!(picker
            .results()
            .iter()
            .all(|e| e.category == EmojiCategory::Smileys));
    }

    #[test]
    fn test_emoji_category_switch_ignored_while_querying() {
        let mut picker = EmojiPickerState::default();
        picker.open();
        picker.set_query("fire");
        picker.select_category(EmojiCategory::Food);
        assert_eq!(picker.category(), EmojiCategory::Smileys);
        // Clearing the query makes switching effective again
        picker.set_query("");
        picker.select_category(EmojiCategory::Food);
        assert_eq!(picker.category(), EmojiCategory::Food);
    }

    #[test]
    fn test_emoji_unmatched_query_goes_empty() {
        let mut picker = EmojiPickerState::default();
        picker.open();
        picker.set_query("qqqqqq");
        assert_eq!(picker.phase(), PickerPhase::Empty);
    }
}
