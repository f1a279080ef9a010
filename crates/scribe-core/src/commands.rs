//! Formatting command registry, keyboard shortcuts, and the link dialog
//!
//! Commands are a fixed, explicit registry (a tagged enum) rather than
//! strings handed to an ambient formatting API. Unknown textual ids parse
//! to `None` and are treated as inert by the dispatcher, which keeps host
//! toolbar configuration forward-compatible.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed symbolic command set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandId {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    UnorderedList,
    OrderedList,
    Quote,
    CodeBlock,
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignJustify,
    CreateLink,
    InsertImage,
    Undo,
    Redo,
}

impl CommandId {
    /// Every command, in toolbar order
    pub const ALL: [CommandId; 20] = [
        CommandId::Bold,
        CommandId::Italic,
        CommandId::Underline,
        CommandId::Strikethrough,
        CommandId::Heading1,
        CommandId::Heading2,
        CommandId::Heading3,
        CommandId::Paragraph,
        CommandId::UnorderedList,
        CommandId::OrderedList,
        CommandId::Quote,
        CommandId::CodeBlock,
        CommandId::AlignLeft,
        CommandId::AlignCenter,
        CommandId::AlignRight,
        CommandId::AlignJustify,
        CommandId::CreateLink,
        CommandId::InsertImage,
        CommandId::Undo,
        CommandId::Redo,
    ];

    /// Stable textual id, as used by toolbar configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::Bold => "bold",
            CommandId::Italic => "italic",
            CommandId::Underline => "underline",
            CommandId::Strikethrough => "strikethrough",
            CommandId::Heading1 => "heading1",
            CommandId::Heading2 => "heading2",
            CommandId::Heading3 => "heading3",
            CommandId::Paragraph => "paragraph",
            CommandId::UnorderedList => "unordered-list",
            CommandId::OrderedList => "ordered-list",
            CommandId::Quote => "quote",
            CommandId::CodeBlock => "code-block",
            CommandId::AlignLeft => "align-left",
            CommandId::AlignCenter => "align-center",
            CommandId::AlignRight => "align-right",
            CommandId::AlignJustify => "align-justify",
            CommandId::CreateLink => "create-link",
            CommandId::InsertImage => "insert-image",
            CommandId::Undo => "undo",
            CommandId::Redo => "redo",
        }
    }

    /// Parse a textual id; unknown ids yield `None` and stay inert
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == id)
    }

    /// Human-readable label for toolbar tooltips
    pub fn label(&self) -> &'static str {
        match self {
            CommandId::Bold => "Bold",
            CommandId::Italic => "Italic",
            CommandId::Underline => "Underline",
            CommandId::Strikethrough => "Strikethrough",
            CommandId::Heading1 => "Heading 1",
            CommandId::Heading2 => "Heading 2",
            CommandId::Heading3 => "Heading 3",
            CommandId::Paragraph => "Paragraph",
            CommandId::UnorderedList => "Bulleted list",
            CommandId::OrderedList => "Numbered list",
            CommandId::Quote => "Quote",
            CommandId::CodeBlock => "Code block",
            CommandId::AlignLeft => "Align left",
            CommandId::AlignCenter => "Align center",
            CommandId::AlignRight => "Align right",
            CommandId::AlignJustify => "Justify",
            CommandId::CreateLink => "Insert link",
            CommandId::InsertImage => "Insert image",
            CommandId::Undo => "Undo",
            CommandId::Redo => "Redo",
        }
    }

    /// Keyboard shortcut, when one is bound
    pub fn shortcut(&self) -> Option<Shortcut> {
        match self {
            CommandId::Bold => Some(Shortcut { key: 'b', shift: false }),
            CommandId::Italic => Some(Shortcut { key: 'i', shift: false }),
            CommandId::Underline => Some(Shortcut { key: 'u', shift: false }),
            CommandId::CreateLink => Some(Shortcut { key: 'k', shift: false }),
            CommandId::Undo => Some(Shortcut { key: 'z', shift: false }),
            CommandId::Redo => Some(Shortcut { key: 'z', shift: true }),
            _ => None,
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A Ctrl/platform-modifier keyboard shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    /// Letter pressed together with the modifier
    pub key: char,
    /// Whether Shift is part of the chord
    pub shift: bool,
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            write!(f, "Ctrl+Shift+{}", self.key.to_ascii_uppercase())
        } else {
            write!(f, "Ctrl+{}", self.key.to_ascii_uppercase())
        }
    }
}

/// Immutable description of one registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub id: CommandId,
    pub label: &'static str,
    pub shortcut: Option<Shortcut>,
}

/// The full command registry, in toolbar order
pub fn registry() -> Vec<CommandDescriptor> {
    CommandId::ALL
        .iter()
        .map(|&id| CommandDescriptor {
            id,
            label: id.label(),
            shortcut: id.shortcut(),
        })
        .collect()
}

/// A key pressed on the surface, normalized by the platform adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
}

/// Keyboard input with modifier state
///
/// `ctrl` stands for the platform command modifier (Ctrl, or Cmd on
/// macOS); the adapter normalizes before handing input to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyInput {
    /// A plain character press
    pub fn char(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: false,
            shift: false,
        }
    }

    /// A Ctrl chord
    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
            shift: false,
        }
    }

    /// A Ctrl+Shift chord
    pub fn ctrl_shift(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
            shift: true,
        }
    }

    /// A bare named key
    pub fn named(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }
}

/// What a recognized shortcut chord asks the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Dispatch a command directly
    Dispatch(CommandId),
    /// Open the two-phase link dialog
    OpenLinkDialog,
}

/// Resolve a key chord against the fixed shortcut table
pub fn shortcut_action(input: &KeyInput) -> Option<ShortcutAction> {
    if !input.ctrl {
        return None;
    }
    let Key::Char(c) = input.key else {
        return None;
    };
    match (c.to_ascii_lowercase(), input.shift) {
        ('b', false) => Some(ShortcutAction::Dispatch(CommandId::Bold)),
        ('i', false) => Some(ShortcutAction::Dispatch(CommandId::Italic)),
        ('u', false) => Some(ShortcutAction::Dispatch(CommandId::Underline)),
        ('k', false) => Some(ShortcutAction::OpenLinkDialog),
        ('z', false) => Some(ShortcutAction::Dispatch(CommandId::Undo)),
        ('z', true) => Some(ShortcutAction::Dispatch(CommandId::Redo)),
        _ => None,
    }
}

/// Transient dialog collecting a URL for link insertion
///
/// Two-phase: the dialog buffers the URL; Enter submits only a trimmed
/// non-empty value, Escape cancels without mutating the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDialog {
    url: String,
}

impl LinkDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current URL text
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the URL text (dialog input field)
    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    /// Append a typed character
    pub fn push(&mut self, c: char) {
        self.url.push(c);
    }

    /// Remove the last typed character
    pub fn pop(&mut self) {
        self.url.pop();
    }

    /// Consume the dialog; `Some(url)` only for a trimmed non-empty URL
    pub fn submit(self) -> Option<String> {
        let trimmed = self.url.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_command() {
        for id in CommandId::ALL {
            assert_eq!(CommandId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_unknown_id_parses_to_none() {
        assert_eq!(CommandId::parse("sparkle"), None);
        assert_eq!(CommandId::parse(""), None);
    }

    #[test]
    fn test_registry_is_complete_and_ordered() {
        let registry = registry();
        assert_eq!(registry.len(), CommandId::ALL.len());
        assert_eq!(registry[0].id, CommandId::Bold);
        assert_eq!(registry[0].shortcut.unwrap().to_string(), "Ctrl+B");
    }

    #[test]
    fn test_shortcut_table() {
        assert_eq!(
            shortcut_action(&KeyInput::ctrl('b')),
            Some(ShortcutAction::Dispatch(CommandId::Bold))
        );
        assert_eq!(
            shortcut_action(&KeyInput::ctrl('z')),
            Some(ShortcutAction::Dispatch(CommandId::Undo))
        );
        assert_eq!(
            shortcut_action(&KeyInput::ctrl_shift('z')),
            Some(ShortcutAction::Dispatch(CommandId::Redo))
        );
        assert_eq!(
            shortcut_action(&KeyInput::ctrl('k')),
            Some(ShortcutAction::OpenLinkDialog)
        );
        // No modifier, no shortcut
        assert_eq!(shortcut_action(&KeyInput::char('b')), None);
        assert_eq!(shortcut_action(&KeyInput::ctrl('q')), None);
    }

    #[test]
    fn test_link_dialog_submit_trims() {
        let mut dialog = LinkDialog::new();
        dialog.set_url("  https://example.com  ");
        assert_eq!(dialog.submit(), Some("https://example.com".to_string()));
    }

    #[test]
    fn test_link_dialog_empty_never_submits() {
        assert_eq!(LinkDialog::new().submit(), None);
        let mut dialog = LinkDialog::new();
        dialog.set_url("   ");
        assert_eq!(dialog.submit(), None);
    }
}
