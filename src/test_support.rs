//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crate::core::deck::Deck;
use crate::core::navigation::Command;
use crate::tui::event::{EventSource, SlideEvent};

/// Builds a deck whose pages are exactly `pages`.
pub fn deck_of(pages: &[&str]) -> Deck {
    Deck::from_text(&pages.join(crate::core::deck::PAGE_BREAK))
}

/// Replays a fixed list of events, one per poll. Running past the end is
/// an error so a test that forgets its exit key fails instead of hanging.
pub struct ScriptedEvents {
    script: VecDeque<SlideEvent>,
}

impl ScriptedEvents {
    pub fn new(script: Vec<SlideEvent>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, _timeout: Duration) -> io::Result<Option<SlideEvent>> {
        self.script
            .pop_front()
            .map(Some)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted")
            })
    }
}

/// Never produces an event; each poll just waits out its timeout.
pub struct IdleEvents;

impl EventSource for IdleEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<SlideEvent>> {
        thread::sleep(timeout);
        Ok(None)
    }
}

/// Idle until `delay` has passed since the first poll, then reports the
/// quit key once.
pub struct QuitAfter {
    delay: Duration,
    started: Option<Instant>,
    fired: bool,
}

impl QuitAfter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: None,
            fired: false,
        }
    }
}

impl EventSource for QuitAfter {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<SlideEvent>> {
        let started = *self.started.get_or_insert_with(Instant::now);
        let remaining = self.delay.saturating_sub(started.elapsed());
        if self.fired || remaining > timeout {
            thread::sleep(timeout);
            return Ok(None);
        }
        thread::sleep(remaining);
        self.fired = true;
        Ok(Some(SlideEvent::Command(Command::Quit)))
    }
}
