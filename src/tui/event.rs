use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::navigation::Command;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideEvent {
    Command(Command),
    /// The terminal changed size; redraw the current page.
    Resize,
    /// Any other key or event. No state change.
    Ignored,
}

/// Something that produces slide events. `Send` so auto mode can listen
/// on a separate thread.
pub trait EventSource: Send {
    /// Waits up to `timeout` for the next event.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<SlideEvent>>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<SlideEvent>> {
        if event::poll(timeout)? {
            Ok(Some(map_event(event::read()?)))
        } else {
            Ok(None)
        }
    }
}

pub fn map_event(event: Event) -> SlideEvent {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(width, height) => {
            log::debug!("Resize to {}x{}", width, height);
            SlideEvent::Resize
        }
        _ => SlideEvent::Ignored,
    }
}

fn map_key(key_event: KeyEvent) -> SlideEvent {
    // Windows reports releases too; only presses move pages
    if key_event.kind != KeyEventKind::Press {
        return SlideEvent::Ignored;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        // Raw mode delivers Ctrl+C as a key, not as SIGINT
        (modifiers, KeyCode::Char('c' | 'C')) if modifiers.contains(KeyModifiers::CONTROL) => {
            SlideEvent::Command(Command::Quit)
        }
        (_, KeyCode::Esc) => SlideEvent::Command(Command::Quit),
        (_, KeyCode::Char(' ') | KeyCode::Right | KeyCode::Enter) => {
            SlideEvent::Command(Command::Next)
        }
        (_, KeyCode::Left | KeyCode::Backspace | KeyCode::Delete) => {
            SlideEvent::Command(Command::Previous)
        }
        _ => SlideEvent::Ignored,
    }
}
