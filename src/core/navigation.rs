//! # Navigation
//!
//! The page cursor and the rules for moving it. Manual mode feeds key
//! commands into `Navigator::apply`; auto mode feeds it `Command::Next` on a
//! timer. Both get the same boundary behavior.
//!
//! ```text
//! Next      cursor + 1   past the end   → wrap to 0     (loop)  | EndOfDeck
//! Previous  cursor - 1   before 0       → wrap to N - 1 (loop)  | StartOfDeck
//! Quit      →  Exited(Quit)
//! ```

/// A discrete navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Quit,
}

/// Why a presentation session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Quit key (Esc / Ctrl+C).
    Quit,
    /// `Next` on the last page without loop mode.
    EndOfDeck,
    /// `Previous` on the first page without loop mode.
    StartOfDeck,
    /// The process received SIGINT or SIGTERM.
    Interrupted,
}

/// Result of applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The cursor now points at this page; it must be rendered.
    Moved(usize),
    /// The session is over. Nothing more is rendered.
    Exited(ExitReason),
}

/// Owns the cursor into a deck of `len` pages.
#[derive(Debug, Clone)]
pub struct Navigator {
    len: usize,
    cursor: usize,
    looping: bool,
    exited: Option<ExitReason>,
}

impl Navigator {
    /// `len` is clamped to at least 1: a deck always has a page.
    pub fn new(len: usize, looping: bool) -> Self {
        Self {
            len: len.max(1),
            cursor: 0,
            looping,
            exited: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn exited(&self) -> Option<ExitReason> {
        self.exited
    }

    pub fn apply(&mut self, command: Command) -> Transition {
        if let Some(reason) = self.exited {
            return Transition::Exited(reason);
        }

        let next = match command {
            Command::Quit => None,
            Command::Next if self.cursor + 1 < self.len => Some(self.cursor + 1),
            Command::Next if self.looping => Some(0),
            Command::Next => None,
            Command::Previous if self.cursor > 0 => Some(self.cursor - 1),
            Command::Previous if self.looping => Some(self.len - 1),
            Command::Previous => None,
        };

        match next {
            Some(cursor) => {
                self.cursor = cursor;
                Transition::Moved(cursor)
            }
            None => {
                let reason = match command {
                    Command::Next => ExitReason::EndOfDeck,
                    Command::Previous => ExitReason::StartOfDeck,
                    Command::Quit => ExitReason::Quit,
                };
                self.exited = Some(reason);
                Transition::Exited(reason)
            }
        }
    }
}
