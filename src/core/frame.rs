//! # Frames
//!
//! Turns one page into one full-screen redraw. Composition is pure: it
//! decides which text lands on which row. Encoding writes the escape
//! sequences for that frame into any `Write`, normally a scratch buffer
//! that the screen flushes in one go.
//!
//! ```text
//! gravity = false          gravity = true
//! ┌──────────────┐         ┌──────────────┐
//! │ line 1       │         │              │
//! │ line 2       │         │              │
//! │              │         │ line 1       │
//! │              │         │ line 2       │
//! └──────────────┘         └──────────────┘
//! ```
//!
//! Pages taller than the viewport show their first `height` lines in both
//! modes. Gravity only pads; it never scrolls. Lines are written whole;
//! the viewport width does not change what a row holds.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::core::deck::Page;

/// Viewport and alignment for a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub gravity: bool,
    pub width: u16,
    pub height: u16,
}

/// The rows of one redraw, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<String>,
    height: u16,
}

impl Frame {
    /// Lays `page` out on the viewport. Returns `None` for a zero-sized
    /// viewport, which terminals report transiently while resizing.
    pub fn compose(page: &Page, layout: Layout) -> Option<Self> {
        if layout.width == 0 || layout.height == 0 {
            return None;
        }

        let height = usize::from(layout.height);
        let lines: Vec<&str> = page.lines().collect();
        let padding = if layout.gravity {
            height.saturating_sub(lines.len())
        } else {
            0
        };

        let rows = std::iter::repeat_n("", padding)
            .chain(lines)
            .take(height)
            .map(str::to_string)
            .collect();

        Some(Self {
            rows,
            height: layout.height,
        })
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Clear + home, then each row behind a line clear. Every row except
    /// the viewport's bottom row ends in `\r\n`; writing one there would
    /// scroll the screen by a line.
    pub fn encode(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        let bottom_row = usize::from(self.height) - 1;
        for (index, row) in self.rows.iter().enumerate() {
            queue!(out, Clear(ClearType::CurrentLine), Print(row))?;
            if index != bottom_row {
                queue!(out, Print("\r\n"))?;
            }
        }
        Ok(())
    }
}

/// The sequence left on screen when a session ends.
pub fn encode_teardown(out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}
