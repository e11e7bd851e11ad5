//! # Deck
//!
//! Splits the input text into pages. A page break is a line holding exactly
//! `---`, with a newline on both sides:
//!
//! ```text
//! first page
//! ---            ← page break
//! second page
//! ```
//!
//! `---x`, `a---b` and a `---` on the very first line are page content.

use crate::core::help::HELP_TEXT;

/// The separator between two pages, including the newlines around it.
pub const PAGE_BREAK: &str = "\n---\n";

/// One page of text, possibly spanning several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page(String);

impl Page {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lines split on `\n`. Unlike `str::lines`, a trailing newline yields a
    /// final empty line, so `"c\n"` is two rows.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n')
    }
}

/// The ordered, immutable pages of one presentation. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pages: Vec<Page>,
}

impl Deck {
    /// Normalizes line endings and splits on page breaks.
    /// Empty text gives the built-in help deck.
    pub fn from_text(text: &str) -> Self {
        let normalized = normalize_line_endings(text);
        if normalized.is_empty() {
            return Self::help();
        }
        Self {
            pages: normalized.split(PAGE_BREAK).map(Page::new).collect(),
        }
    }

    /// The built-in help deck shown when there is nothing else to present.
    pub fn help() -> Self {
        Self {
            pages: HELP_TEXT.split(PAGE_BREAK).map(Page::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Panics if `index >= len()`. The navigator keeps its cursor in range.
    pub fn page(&self, index: usize) -> &Page {
        &self.pages[index]
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

/// CRLF → LF.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}
