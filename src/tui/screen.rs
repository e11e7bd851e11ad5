//! Writes frames to the terminal: one assembled buffer and one flush per
//! render, so a half-drawn page is never left on screen.

use std::io::{self, Write};

use log::{debug, warn};

use crate::core::deck::Page;
use crate::core::frame::{Frame, Layout, encode_teardown};

/// Where the viewport size comes from.
#[derive(Debug, Clone, Copy)]
enum Viewport {
    /// Asked from the terminal before every draw, so resizes are picked up.
    Terminal,
    Fixed { width: u16, height: u16 },
}

#[derive(Debug)]
pub struct Screen<W: Write> {
    out: W,
    gravity: bool,
    viewport: Viewport,
    frames_drawn: usize,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, gravity: bool) -> Self {
        Self {
            out,
            gravity,
            viewport: Viewport::Terminal,
            frames_drawn: 0,
        }
    }

    /// A screen that never queries the terminal.
    pub fn with_size(out: W, gravity: bool, width: u16, height: u16) -> Self {
        Self {
            out,
            gravity,
            viewport: Viewport::Fixed { width, height },
            frames_drawn: 0,
        }
    }

    /// Full redraw of `page`. A zero or unknown viewport draws nothing.
    pub fn draw(&mut self, page: &Page) -> io::Result<()> {
        let Some((width, height)) = self.size() else {
            return Ok(());
        };
        let layout = Layout {
            gravity: self.gravity,
            width,
            height,
        };
        let Some(frame) = Frame::compose(page, layout) else {
            debug!("Skipping frame for {}x{} viewport", width, height);
            return Ok(());
        };

        let mut buf = Vec::new();
        frame.encode(&mut buf)?;
        self.out.write_all(&buf)?;
        self.out.flush()?;
        self.frames_drawn += 1;
        Ok(())
    }

    /// Leaves the screen cleared with the cursor at the top left.
    pub fn teardown(&mut self) -> io::Result<()> {
        encode_teardown(&mut self.out)?;
        self.out.flush()
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn size(&self) -> Option<(u16, u16)> {
        match self.viewport {
            Viewport::Fixed { width, height } => Some((width, height)),
            Viewport::Terminal => match crossterm::terminal::size() {
                Ok(size) => Some(size),
                Err(e) => {
                    warn!("Could not read terminal size: {}", e);
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_writes_one_frame() {
        let mut screen = Screen::with_size(Vec::new(), false, 10, 2);
        screen.draw(&Page::new("hi")).unwrap();
        assert_eq!(screen.frames_drawn(), 1);
        assert_eq!(screen.get_ref().as_slice(), b"\x1b[2J\x1b[1;1H\x1b[2Khi\r\n");
    }

    #[test]
    fn test_zero_height_draws_nothing() {
        let mut screen = Screen::with_size(Vec::new(), true, 10, 0);
        screen.draw(&Page::new("hi")).unwrap();
        assert_eq!(screen.frames_drawn(), 0);
        assert!(screen.get_ref().is_empty());
    }

    #[test]
    fn test_teardown_clears() {
        let mut screen = Screen::with_size(Vec::new(), false, 10, 2);
        screen.teardown().unwrap();
        assert_eq!(screen.into_inner(), b"\x1b[2J\x1b[1;1H");
    }
}
