//! Document surface abstraction and the headless buffer implementation
//!
//! The engine never talks to a host rendering target directly; it drives a
//! [`DocumentSurface`], which exposes caret/selection control and the small
//! set of mutation primitives every command maps onto. [`BufferSurface`] is
//! the headless implementation: an HTML-like markup string, a selection
//! range, and snapshot-based undo/redo. Platform adapters (a browser
//! contenteditable bridge, a test double) implement the same trait.
//!
//! Markup format: inline tags (`<strong>`, `<em>`, `<u>`, `<s>`, `<a>`,
//! `<img>`) and one optional block wrapper per line (`<h1>`..`<h3>`,
//! `<blockquote>`, `<pre>`, `<ul><li>`, `<ol><li>`, `<div align="..">`).
//! Plain text is always the markup with every tag stripped.

use std::ops::Range;

/// Maximum number of undo snapshots kept
const UNDO_DEPTH: usize = 100;

/// Content read back from a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceContent {
    /// Full markup
    pub markup: String,
    /// Markup with all tags stripped
    pub text: String,
}

/// Inline character styles that toggle idempotently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl InlineStyle {
    /// Tag name used in markup
    pub fn tag(&self) -> &'static str {
        match self {
            InlineStyle::Bold => "strong",
            InlineStyle::Italic => "em",
            InlineStyle::Underline => "u",
            InlineStyle::Strikethrough => "s",
        }
    }
}

/// Block-level formats applied to the line containing the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormat {
    /// Plain line without a wrapper
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    UnorderedList,
    OrderedList,
    Quote,
    CodeBlock,
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignJustify,
}

impl BlockFormat {
    /// Open/close wrapper strings, `None` for `Paragraph`
    fn wrapper(&self) -> Option<(&'static str, &'static str)> {
        match self {
            BlockFormat::Paragraph => None,
            BlockFormat::Heading1 => Some(("<h1>", "</h1>")),
            BlockFormat::Heading2 => Some(("<h2>", "</h2>")),
            BlockFormat::Heading3 => Some(("<h3>", "</h3>")),
            BlockFormat::UnorderedList => Some(("<ul><li>", "</li></ul>")),
            BlockFormat::OrderedList => Some(("<ol><li>", "</li></ol>")),
            BlockFormat::Quote => Some(("<blockquote>", "</blockquote>")),
            BlockFormat::CodeBlock => Some(("<pre>", "</pre>")),
            BlockFormat::AlignLeft => Some(("<div align=\"left\">", "</div>")),
            BlockFormat::AlignCenter => Some(("<div align=\"center\">", "</div>")),
            BlockFormat::AlignRight => Some(("<div align=\"right\">", "</div>")),
            BlockFormat::AlignJustify => Some(("<div align=\"justify\">", "</div>")),
        }
    }

    const WRAPPED: [BlockFormat; 11] = [
        BlockFormat::Heading1,
        BlockFormat::Heading2,
        BlockFormat::Heading3,
        BlockFormat::UnorderedList,
        BlockFormat::OrderedList,
        BlockFormat::Quote,
        BlockFormat::CodeBlock,
        BlockFormat::AlignLeft,
        BlockFormat::AlignCenter,
        BlockFormat::AlignRight,
        BlockFormat::AlignJustify,
    ];
}

/// Remove all markup tags, yielding the plain text
///
/// A `<` that does not open a plausible tag (next char is not a letter,
/// `/` or `!`, or no closing `>` exists) is kept literally.
pub fn strip_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let after = &rest[lt + 1..];
        let opens_tag = after
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
            .unwrap_or(false);
        match after.find('>') {
            Some(gt) if opens_tag => {
                rest = &after[gt + 1..];
            }
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// The abstract editable surface driven by the engine
///
/// Mutation primitives assume exclusive synchronous access for the duration
/// of a single command; there is no concurrent mutation path.
pub trait DocumentSurface {
    /// Read the current content; `text` equals `markup` with tags stripped
    fn read_content(&self) -> SurfaceContent;

    /// Atomically replace the whole content
    ///
    /// Only the synchronization controller calls this; input handlers never
    /// do, to avoid caret-reset echo loops.
    fn write_content(&mut self, markup: &str);

    /// Request input focus
    fn focus(&mut self);

    /// Release input focus
    fn blur(&mut self);

    /// Whether the surface currently has focus
    fn is_focused(&self) -> bool;

    /// Current selection as a byte range into the markup
    fn selection(&self) -> Range<usize>;

    /// Move the selection; collapses to a caret when `start == end`
    fn set_selection(&mut self, range: Range<usize>);

    /// Caret position (end of the selection)
    fn caret(&self) -> usize {
        self.selection().end
    }

    /// Toggle an inline style on the selection
    fn apply_inline_style(&mut self, style: InlineStyle);

    /// Toggle a block format on the line containing the selection
    fn toggle_block_format(&mut self, format: BlockFormat);

    /// Insert text at the caret, replacing any selection
    fn insert_text(&mut self, text: &str);

    /// Insert a link; wraps the selection when one exists
    fn insert_link(&mut self, url: &str);

    /// Insert an image reference at the caret
    fn insert_image(&mut self, url: &str);

    /// Replace an arbitrary range with text, caret lands after it
    fn replace_range(&mut self, range: Range<usize>, text: &str);

    /// Delete the selection, or the character before the caret
    fn delete_backward(&mut self);

    /// Revert the last mutation
    fn undo(&mut self);

    /// Re-apply the last undone mutation
    fn redo(&mut self);
}

#[derive(Debug, Clone)]
struct Snapshot {
    content: String,
    selection: Range<usize>,
}

/// Headless in-memory surface
///
/// Holds the markup buffer, the selection, and snapshot undo/redo stacks.
/// This is the surface used by tests and by the desktop shell; a browser
/// adapter would satisfy the same trait against a live DOM node.
#[derive(Debug)]
pub struct BufferSurface {
    content: String,
    selection: Range<usize>,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    focused: bool,
}

impl BufferSurface {
    /// Create a surface with initial markup, caret at the end
    pub fn new(initial: &str) -> Self {
        let len = initial.len();
        Self {
            content: initial.to_string(),
            selection: len..len,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            focused: false,
        }
    }

    fn push_undo(&mut self) {
        if self.undo_stack.len() == UNDO_DEPTH {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(Snapshot {
            content: self.content.clone(),
            selection: self.selection.clone(),
        });
        self.redo_stack.clear();
    }

    fn clamp_selection(&mut self) {
        let len = self.content.len();
        let mut start = self.selection.start.min(len);
        let mut end = self.selection.end.min(len);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }
        // Adapter-reported offsets may land inside a multi-byte character;
        // snap them back to the nearest boundary
        while !self.content.is_char_boundary(start) {
            start -= 1;
        }
        while !self.content.is_char_boundary(end) {
            end -= 1;
        }
        self.selection = start..end;
    }

    /// Byte bounds of the line containing the selection
    fn line_bounds(&self) -> Range<usize> {
        let start = self.content[..self.selection.start]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = self.content[self.selection.end..]
            .find('\n')
            .map(|i| i + self.selection.end)
            .unwrap_or(self.content.len());
        start..end
    }

    /// Strip a known block wrapper from a line, if present
    fn unwrap_block(line: &str) -> (&str, Option<BlockFormat>) {
        for format in BlockFormat::WRAPPED {
            let (open, close) = format.wrapper().expect("wrapped formats have wrappers");
            if line.len() >= open.len() + close.len()
                && line.starts_with(open)
                && line.ends_with(close)
            {
                return (&line[open.len()..line.len() - close.len()], Some(format));
            }
        }
        (line, None)
    }
}

impl DocumentSurface for BufferSurface {
    fn read_content(&self) -> SurfaceContent {
        SurfaceContent {
            markup: self.content.clone(),
            text: strip_markup(&self.content),
        }
    }

    fn write_content(&mut self, markup: &str) {
        self.content = markup.to_string();
        let len = self.content.len();
        self.selection = len..len;
        // An atomic external replacement invalidates edit history
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    fn set_selection(&mut self, range: Range<usize>) {
        self.selection = range;
        self.clamp_selection();
    }

    fn apply_inline_style(&mut self, style: InlineStyle) {
        let tag = style.tag();
        let open = format!("<{}>", tag);
        let close = format!("</{}>", tag);
        let Range { start, end } = self.selection.clone();
        self.push_undo();

        if start == end {
            // Caret inside an empty pair toggles it away, otherwise open one
            if self.content[..start].ends_with(&open) && self.content[start..].starts_with(&close) {
                self.content
                    .replace_range(start - open.len()..start + close.len(), "");
                let caret = start - open.len();
                self.selection = caret..caret;
            } else {
                self.content.insert_str(start, &close);
                self.content.insert_str(start, &open);
                let caret = start + open.len();
                self.selection = caret..caret;
            }
            return;
        }

        let selected = &self.content[start..end];
        if self.content[..start].ends_with(&open) && self.content[end..].starts_with(&close) {
            // Selection covers the wrapped inner text: unwrap
            self.content.replace_range(end..end + close.len(), "");
            self.content.replace_range(start - open.len()..start, "");
            self.selection = start - open.len()..end - open.len();
        } else if selected.len() >= open.len() + close.len()
            && selected.starts_with(&open)
            && selected.ends_with(&close)
        {
            // Selection includes the tags themselves: unwrap
            let inner = selected[open.len()..selected.len() - close.len()].to_string();
            self.content.replace_range(start..end, &inner);
            self.selection = start..start + inner.len();
        } else {
            self.content.insert_str(end, &close);
            self.content.insert_str(start, &open);
            self.selection = start + open.len()..end + open.len();
        }
    }

    fn toggle_block_format(&mut self, format: BlockFormat) {
        let bounds = self.line_bounds();
        self.push_undo();
        let line = self.content[bounds.clone()].to_string();
        let (inner, current) = Self::unwrap_block(&line);
        let new_line = if current == Some(format) || format == BlockFormat::Paragraph {
            inner.to_string()
        } else {
            match format.wrapper() {
                Some((open, close)) => format!("{}{}{}", open, inner, close),
                None => inner.to_string(),
            }
        };
        let caret = bounds.start + new_line.len();
        self.content.replace_range(bounds, &new_line);
        self.selection = caret..caret;
    }

    fn insert_text(&mut self, text: &str) {
        let range = self.selection.clone();
        self.push_undo();
        self.content.replace_range(range.clone(), text);
        let caret = range.start + text.len();
        self.selection = caret..caret;
    }

    fn insert_link(&mut self, url: &str) {
        let Range { start, end } = self.selection.clone();
        self.push_undo();
        if start == end {
            let link = format!("<a href=\"{}\">{}</a>", url, url);
            self.content.insert_str(start, &link);
            let caret = start + link.len();
            self.selection = caret..caret;
        } else {
            let open = format!("<a href=\"{}\">", url);
            self.content.insert_str(end, "</a>");
            self.content.insert_str(start, &open);
            let caret = end + open.len() + "</a>".len();
            self.selection = caret..caret;
        }
    }

    fn insert_image(&mut self, url: &str) {
        let range = self.selection.clone();
        self.push_undo();
        let img = format!("<img src=\"{}\">", url);
        self.content.replace_range(range.clone(), &img);
        let caret = range.start + img.len();
        self.selection = caret..caret;
    }

    fn replace_range(&mut self, range: Range<usize>, text: &str) {
        self.push_undo();
        self.content.replace_range(range.clone(), text);
        let caret = range.start + text.len();
        self.selection = caret..caret;
        self.clamp_selection();
    }

    fn delete_backward(&mut self) {
        let Range { start, end } = self.selection.clone();
        if start != end {
            self.push_undo();
            self.content.replace_range(start..end, "");
            self.selection = start..start;
            return;
        }
        if start == 0 {
            return;
        }
        let prev = self.content[..start]
            .chars()
            .next_back()
            .map(|c| start - c.len_utf8())
            .unwrap_or(0);
        self.push_undo();
        self.content.replace_range(prev..start, "");
        self.selection = prev..prev;
    }

    fn undo(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.redo_stack.push(Snapshot {
                content: std::mem::replace(&mut self.content, snapshot.content),
                selection: std::mem::replace(&mut self.selection, snapshot.selection),
            });
        }
    }

    fn redo(&mut self) {
        if let Some(snapshot) = self.redo_stack.pop() {
            self.undo_stack.push(Snapshot {
                content: std::mem::replace(&mut self.content, snapshot.content),
                selection: std::mem::replace(&mut self.selection, snapshot.selection),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup_removes_tags() {
        assert_eq!(strip_markup("<strong>Hi</strong> there"), "Hi there");
        assert_eq!(strip_markup("<h1>Title</h1>\nbody"), "Title\nbody");
        assert_eq!(strip_markup("plain"), "plain");
    }

    #[test]
    fn test_strip_markup_keeps_literal_angle_brackets() {
        assert_eq!(strip_markup("2 < 3"), "2 < 3");
        assert_eq!(strip_markup("a <b>b</b> < c"), "a b < c");
        assert_eq!(strip_markup("trailing <"), "trailing <");
    }

    #[test]
    fn test_read_content_text_matches_strip() {
        let surface = BufferSurface::new("<em>styled</em> text");
        let content = surface.read_content();
        assert_eq!(content.text, "styled text");
        assert_eq!(content.text, strip_markup(&content.markup));
    }

    #[test]
    fn test_insert_text_at_caret() {
        let mut surface = BufferSurface::new("");
        surface.insert_text("Hello");
        surface.insert_text(" world");
        assert_eq!(surface.read_content().markup, "Hello world");
    }

    #[test]
    fn test_inline_style_toggles_on_selection() {
        let mut surface = BufferSurface::new("Hello world");
        surface.set_selection(0..5);
        surface.apply_inline_style(InlineStyle::Bold);
        assert_eq!(surface.read_content().markup, "<strong>Hello</strong> world");
        // Applying twice reverts
        surface.apply_inline_style(InlineStyle::Bold);
        assert_eq!(surface.read_content().markup, "Hello world");
    }

    #[test]
    fn test_inline_style_empty_selection_toggles_pair() {
        let mut surface = BufferSurface::new("");
        surface.apply_inline_style(InlineStyle::Italic);
        assert_eq!(surface.read_content().markup, "<em></em>");
        surface.apply_inline_style(InlineStyle::Italic);
        assert_eq!(surface.read_content().markup, "");
    }

    #[test]
    fn test_block_format_toggles() {
        let mut surface = BufferSurface::new("Title");
        surface.set_selection(2..2);
        surface.toggle_block_format(BlockFormat::Heading1);
        assert_eq!(surface.read_content().markup, "<h1>Title</h1>");
        surface.toggle_block_format(BlockFormat::Heading1);
        assert_eq!(surface.read_content().markup, "Title");
    }

    #[test]
    fn test_block_format_replaces_other_wrapper() {
        let mut surface = BufferSurface::new("Quoted");
        surface.set_selection(0..0);
        surface.toggle_block_format(BlockFormat::Quote);
        assert_eq!(surface.read_content().markup, "<blockquote>Quoted</blockquote>");
        surface.toggle_block_format(BlockFormat::Heading2);
        assert_eq!(surface.read_content().markup, "<h2>Quoted</h2>");
        surface.toggle_block_format(BlockFormat::Paragraph);
        assert_eq!(surface.read_content().markup, "Quoted");
    }

    #[test]
    fn test_block_format_only_touches_current_line() {
        let mut surface = BufferSurface::new("one\ntwo\nthree");
        surface.set_selection(5..5); // inside "two"
        surface.toggle_block_format(BlockFormat::Quote);
        assert_eq!(
            surface.read_content().markup,
            "one\n<blockquote>two</blockquote>\nthree"
        );
    }

    #[test]
    fn test_link_wraps_selection() {
        let mut surface = BufferSurface::new("read this");
        surface.set_selection(5..9);
        surface.insert_link("https://example.com");
        assert_eq!(
            surface.read_content().markup,
            "read <a href=\"https://example.com\">this</a>"
        );
    }

    #[test]
    fn test_link_at_caret_uses_url_as_text() {
        let mut surface = BufferSurface::new("");
        surface.insert_link("https://example.com");
        assert_eq!(
            surface.read_content().markup,
            "<a href=\"https://example.com\">https://example.com</a>"
        );
        assert_eq!(surface.read_content().text, "https://example.com");
    }

    #[test]
    fn test_image_insertion_strips_to_nothing() {
        let mut surface = BufferSurface::new("");
        surface.insert_image("https://cdn.example.com/pic.png");
        assert_eq!(surface.read_content().text, "");
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut surface = BufferSurface::new("");
        surface.insert_text("first");
        surface.insert_text(" second");
        surface.undo();
        assert_eq!(surface.read_content().markup, "first");
        surface.undo();
        assert_eq!(surface.read_content().markup, "");
        surface.redo();
        assert_eq!(surface.read_content().markup, "first");
        surface.redo();
        assert_eq!(surface.read_content().markup, "first second");
        // Redo stack exhausted, further redo is a no-op
        surface.redo();
        assert_eq!(surface.read_content().markup, "first second");
    }

    #[test]
    fn test_write_content_resets_history_and_caret() {
        let mut surface = BufferSurface::new("");
        surface.insert_text("draft");
        surface.write_content("<strong>external</strong>");
        assert_eq!(surface.read_content().text, "external");
        surface.undo();
        assert_eq!(surface.read_content().text, "external");
        assert_eq!(surface.caret(), surface.read_content().markup.len());
    }

    #[test]
    fn test_delete_backward_handles_multibyte() {
        let mut surface = BufferSurface::new("");
        surface.insert_text("héllo");
        surface.delete_backward();
        surface.delete_backward();
        surface.delete_backward();
        surface.delete_backward();
        assert_eq!(surface.read_content().markup, "h");
    }

    #[test]
    fn test_replace_range_lands_caret_after_text() {
        let mut surface = BufferSurface::new("say @an please");
        surface.replace_range(4..7, "@ana ");
        assert_eq!(surface.read_content().markup, "say @ana  please");
        assert_eq!(surface.caret(), 4 + "@ana ".len());
    }

    #[test]
    fn test_selection_snaps_to_char_boundaries() {
        let mut surface = BufferSurface::new("héllo");
        // Byte 2 is inside the two-byte 'é'
        surface.set_selection(2..2);
        assert_eq!(surface.selection(), 1..1);
        surface.insert_text("!");
        assert_eq!(surface.read_content().markup, "h!éllo");
    }

    #[test]
    fn test_mid_codepoint_selection_never_splits_a_glyph() {
        let mut surface = BufferSurface::new("a🔥b");
        // The glyph occupies bytes 1..5; both endpoints land inside it
        surface.set_selection(2..4);
        surface.insert_text("x");
        assert_eq!(surface.read_content().markup, "ax🔥b");
    }
}
