//! Key-driven playback. Single-threaded: render, wait for a key, render.

use std::io::{self, Write};
use std::time::Duration;

use log::{debug, info};

use crate::core::deck::Deck;
use crate::core::navigation::{ExitReason, Navigator, Transition};
use crate::core::signal::StopSignal;
use crate::tui::event::{EventSource, SlideEvent};
use crate::tui::screen::Screen;

/// How long one poll blocks before the stop signal is checked again.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Shows page 0, then follows navigation keys until the deck is left,
/// the quit key is pressed, or `stop` is raised.
pub fn run_manual<W: Write, E: EventSource>(
    screen: &mut Screen<W>,
    events: &mut E,
    deck: &Deck,
    looping: bool,
    stop: &StopSignal,
) -> io::Result<ExitReason> {
    let mut nav = Navigator::new(deck.len(), looping);
    info!("Manual playback: {} pages, loop={}", deck.len(), looping);
    screen.draw(deck.page(nav.cursor()))?;

    loop {
        if let Some(reason) = stop.reason() {
            return Ok(reason);
        }
        let Some(event) = events.poll(POLL_TIMEOUT)? else {
            continue;
        };
        match event {
            SlideEvent::Command(command) => match nav.apply(command) {
                Transition::Moved(cursor) => {
                    debug!("{:?} → page {}", command, cursor);
                    screen.draw(deck.page(cursor))?;
                }
                Transition::Exited(reason) => return Ok(reason),
            },
            SlideEvent::Resize => screen.draw(deck.page(nav.cursor()))?,
            SlideEvent::Ignored => {}
        }
    }
}
