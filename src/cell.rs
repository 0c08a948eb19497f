//! A single character position on a [`Surface`](crate::surface::Surface).
//!
//! Wide glyphs (CJK titles, emoji segment images) occupy two columns: the
//! first cell holds the content, the second is a [`CellContent::Continuation`].

use crate::color::Rgba;
use crate::style::{Style, TextAttributes};
use crate::unicode::grapheme_width;

/// Content of a terminal cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CellContent {
    /// Single-codepoint character.
    Char(char),
    /// Multi-codepoint grapheme cluster (ZWJ emoji, combining marks).
    Grapheme(Box<str>),
    /// Empty/cleared cell.
    #[default]
    Empty,
    /// Continuation of a wide character from the previous cell.
    Continuation,
}

impl CellContent {
    /// Build content for one grapheme cluster.
    #[must_use]
    pub fn from_grapheme(grapheme: &str) -> Self {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Self::Empty,
            (Some(ch), None) => Self::Char(ch),
            _ => Self::Grapheme(grapheme.into()),
        }
    }

    /// Display width of this content in columns.
    #[must_use]
    pub fn display_width(&self) -> usize {
        match self {
            Self::Char(c) => grapheme_width(c.encode_utf8(&mut [0; 4])),
            Self::Grapheme(g) => grapheme_width(g),
            Self::Empty => 1,
            Self::Continuation => 0,
        }
    }

    /// Append the printable form of this content to `out`.
    ///
    /// Empty cells print as a space, continuations print nothing.
    pub fn push_to(&self, out: &mut String) {
        match self {
            Self::Char(c) => out.push(*c),
            Self::Grapheme(g) => out.push_str(g),
            Self::Empty => out.push(' '),
            Self::Continuation => {}
        }
    }
}

/// A styled terminal cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub content: CellContent,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attributes: TextAttributes,
}

impl Cell {
    /// Create a cell holding `ch`.
    #[must_use]
    pub fn new(ch: char, style: Style) -> Self {
        Self::with_content(CellContent::Char(ch), style)
    }

    /// Create a cell holding one grapheme cluster.
    #[must_use]
    pub fn from_grapheme(grapheme: &str, style: Style) -> Self {
        Self::with_content(CellContent::from_grapheme(grapheme), style)
    }

    fn with_content(content: CellContent, style: Style) -> Self {
        Self {
            content,
            fg: style.fg.unwrap_or(Rgba::WHITE),
            bg: style.bg.unwrap_or(Rgba::TRANSPARENT),
            attributes: style.attributes,
        }
    }

    /// Create an empty cell with a background color.
    #[must_use]
    pub fn clear(bg: Rgba) -> Self {
        Self {
            content: CellContent::Empty,
            fg: Rgba::WHITE,
            bg,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create the trailing half of a wide character.
    #[must_use]
    pub fn continuation(bg: Rgba) -> Self {
        Self {
            content: CellContent::Continuation,
            ..Self::clear(bg)
        }
    }

    /// Display width of the cell content.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.content.display_width()
    }

    /// Check if this is a continuation cell.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        matches!(self.content, CellContent::Continuation)
    }

    /// Check if the cell has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
    }

    /// Composite this cell over `background`.
    ///
    /// Colors blend with Porter-Duff "over"; empty cells keep the content
    /// and attributes underneath.
    #[must_use]
    pub fn blend_over(self, background: &Self) -> Self {
        let (content, attributes) = if self.is_empty() {
            (background.content.clone(), background.attributes)
        } else {
            (self.content, self.attributes)
        };

        Self {
            content,
            fg: self.fg.blend_over(background.fg),
            bg: self.bg.blend_over(background.bg),
            attributes,
        }
    }
}
