//! Built-in emoji catalog and filtering rules
//!
//! The catalog is local and fixed; listing it still flows through the same
//! picker state machine as mention search so both overlays behave alike.
//! Filtering: a non-empty query matches by substring against the glyph,
//! name, and keywords across all categories; an empty query shows only the
//! selected category. Category switching only has effect while the query
//! is empty.

use serde::Serialize;

/// Catalog categories, in pill order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EmojiCategory {
    Smileys,
    Gestures,
    Hearts,
    Animals,
    Food,
    Symbols,
}

impl EmojiCategory {
    /// Every category, in display order
    pub const ALL: [EmojiCategory; 6] = [
        EmojiCategory::Smileys,
        EmojiCategory::Gestures,
        EmojiCategory::Hearts,
        EmojiCategory::Animals,
        EmojiCategory::Food,
        EmojiCategory::Symbols,
    ];

    /// Label for the category pill
    pub fn label(&self) -> &'static str {
        match self {
            EmojiCategory::Smileys => "Smileys",
            EmojiCategory::Gestures => "Gestures",
            EmojiCategory::Hearts => "Hearts",
            EmojiCategory::Animals => "Animals",
            EmojiCategory::Food => "Food",
            EmojiCategory::Symbols => "Symbols",
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmojiEntry {
    /// The literal glyph inserted into the document
    pub symbol: &'static str,
    /// Searchable name
    pub name: &'static str,
    pub category: EmojiCategory,
    /// Extra search terms
    pub keywords: &'static [&'static str],
}

/// The built-in catalog
pub const CATALOG: &[EmojiEntry] = &[
    EmojiEntry { symbol: "😀", name: "grinning face", category: EmojiCategory::Smileys, keywords: &["happy", "smile"] },
    EmojiEntry { symbol: "😂", name: "face with tears of joy", category: EmojiCategory::Smileys, keywords: &["laugh", "lol"] },
    EmojiEntry { symbol: "😊", name: "smiling face", category: EmojiCategory::Smileys, keywords: &["blush", "happy"] },
    EmojiEntry { symbol: "😎", name: "smiling face with sunglasses", category: EmojiCategory::Smileys, keywords: &["cool"] },
    EmojiEntry { symbol: "😢", name: "crying face", category: EmojiCategory::Smileys, keywords: &["sad", "tear"] },
    EmojiEntry { symbol: "🤔", name: "thinking face", category: EmojiCategory::Smileys, keywords: &["hmm", "think"] },
    EmojiEntry { symbol: "😴", name: "sleeping face", category: EmojiCategory::Smileys, keywords: &["zzz", "tired"] },
    EmojiEntry { symbol: "👍", name: "thumbs up", category: EmojiCategory::Gestures, keywords: &["like", "approve", "yes"] },
    EmojiEntry { symbol: "👎", name: "thumbs down", category: EmojiCategory::Gestures, keywords: &["dislike", "no"] },
    EmojiEntry { symbol: "👏", name: "clapping hands", category: EmojiCategory::Gestures, keywords: &["applause", "bravo"] },
    EmojiEntry { symbol: "🙏", name: "folded hands", category: EmojiCategory::Gestures, keywords: &["thanks", "pray"] },
    EmojiEntry { symbol: "👋", name: "waving hand", category: EmojiCategory::Gestures, keywords: &["hello", "bye"] },
    EmojiEntry { symbol: "✌️", name: "victory hand", category: EmojiCategory::Gestures, keywords: &["peace"] },
    EmojiEntry { symbol: "🤝", name: "handshake", category: EmojiCategory::Gestures, keywords: &["deal", "agreement"] },
    EmojiEntry { symbol: "❤️", name: "red heart", category: EmojiCategory::Hearts, keywords: &["love"] },
    EmojiEntry { symbol: "💙", name: "blue heart", category: EmojiCategory::Hearts, keywords: &["love"] },
    EmojiEntry { symbol: "💚", name: "green heart", category: EmojiCategory::Hearts, keywords: &["love"] },
    EmojiEntry { symbol: "💜", name: "purple heart", category: EmojiCategory::Hearts, keywords: &["love"] },
    EmojiEntry { symbol: "💔", name: "broken heart", category: EmojiCategory::Hearts, keywords: &["sad", "breakup"] },
    EmojiEntry { symbol: "💖", name: "sparkling heart", category: EmojiCategory::Hearts, keywords: &["love", "sparkle"] },
    EmojiEntry { symbol: "🐶", name: "dog face", category: EmojiCategory::Animals, keywords: &["puppy", "pet"] },
    EmojiEntry { symbol: "🐱", name: "cat face", category: EmojiCategory::Animals, keywords: &["kitten", "pet"] },
    EmojiEntry { symbol: "🦊", name: "fox", category: EmojiCategory::Animals, keywords: &[] },
    EmojiEntry { symbol: "🐼", name: "panda", category: EmojiCategory::Animals, keywords: &["bear"] },
    EmojiEntry { symbol: "🦉", name: "owl", category: EmojiCategory::Animals, keywords: &["bird", "night"] },
    EmojiEntry { symbol: "🐢", name: "turtle", category: EmojiCategory::Animals, keywords: &["slow"] },
    EmojiEntry { symbol: "🍕", name: "pizza", category: EmojiCategory::Food, keywords: &["slice"] },
    EmojiEntry { symbol: "🍔", name: "hamburger", category: EmojiCategory::Food, keywords: &["burger"] },
    EmojiEntry { symbol: "🍣", name: "sushi", category: EmojiCategory::Food, keywords: &["fish"] },
    EmojiEntry { symbol: "🍎", name: "red apple", category: EmojiCategory::Food, keywords: &["fruit"] },
    EmojiEntry { symbol: "☕", name: "hot beverage", category: EmojiCategory::Food, keywords: &["coffee", "tea"] },
    EmojiEntry { symbol: "🎂", name: "birthday cake", category: EmojiCategory::Food, keywords: &["cake", "party"] },
    EmojiEntry { symbol: "🔥", name: "fire", category: EmojiCategory::Symbols, keywords: &["hot", "lit"] },
    EmojiEntry { symbol: "✨", name: "sparkles", category: EmojiCategory::Symbols, keywords: &["shiny", "magic"] },
    EmojiEntry { symbol: "🎉", name: "party popper", category: EmojiCategory::Symbols, keywords: &["celebrate", "party"] },
    EmojiEntry { symbol: "⭐", name: "star", category: EmojiCategory::Symbols, keywords: &["favorite"] },
    EmojiEntry { symbol: "💯", name: "hundred points", category: EmojiCategory::Symbols, keywords: &["100", "perfect"] },
    EmojiEntry { symbol: "🚀", name: "rocket", category: EmojiCategory::Symbols, keywords: &["launch", "ship"] },
];

/// Filter the catalog for the picker
pub fn filter(query: &str, category: EmojiCategory) -> Vec<EmojiEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return CATALOG
            .iter()
            .filter(|e| e.category == category)
            .copied()
            .collect();
    }
    CATALOG
        .iter()
        .filter(|e| {
            e.symbol.contains(&query)
                || e.name.contains(&query)
                || e.keywords.iter().any(|k| k.contains(&query))
        })
        .copied()
        .collect()
}
