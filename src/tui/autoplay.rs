//! # Auto Playback
//!
//! Two activities share one [`StopSignal`]:
//!
//! ```text
//!  calling thread (timer)                 listener thread
//!  ─────────────────────                  ───────────────
//!  loop {                                 while !finished && !stop {
//!    stop raised? → return                  poll keys
//!    draw page                              Quit → stop.raise(Quit)
//!    sleep interval (wakes on stop)       }
//!    Next → wrap or return
//!  }
//!  finished.raise(); join listener
//! ```
//!
//! Only the timer thread touches the screen, and it is done drawing before
//! the caller tears the terminal down, so teardown can never interleave
//! with a draw.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::{info, warn};

use crate::core::config::MIN_INTERVAL;
use crate::core::deck::Deck;
use crate::core::navigation::{Command, ExitReason, Navigator, Transition};
use crate::core::signal::StopSignal;
use crate::tui::event::{EventSource, SlideEvent};
use crate::tui::screen::Screen;

/// How long the listener blocks on input before re-checking whether the
/// timer loop has finished.
pub const LISTEN_TIMEOUT: Duration = Duration::from_millis(50);

/// Shows one page per `interval` until the deck runs out (without loop),
/// the quit key is pressed, or `stop` is raised elsewhere.
pub fn run_auto<W: Write, E: EventSource>(
    screen: &mut Screen<W>,
    events: &mut E,
    deck: &Deck,
    interval: Duration,
    looping: bool,
    stop: &StopSignal,
) -> io::Result<ExitReason> {
    let interval = interval.max(MIN_INTERVAL);
    let finished = StopSignal::new();
    info!(
        "Auto playback: {} pages every {:?}, loop={}",
        deck.len(),
        interval,
        looping
    );

    thread::scope(|scope| {
        let listener = scope.spawn(|| listen_for_quit(events, stop, &finished));

        let outcome = advance_on_timer(screen, deck, interval, looping, stop);
        finished.raise(outcome.as_ref().copied().unwrap_or(ExitReason::Quit));

        match listener.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Key listener failed: {}", e),
            Err(_) => warn!("Key listener panicked"),
        }
        outcome
    })
}

fn advance_on_timer<W: Write>(
    screen: &mut Screen<W>,
    deck: &Deck,
    interval: Duration,
    looping: bool,
    stop: &StopSignal,
) -> io::Result<ExitReason> {
    let mut nav = Navigator::new(deck.len(), looping);
    loop {
        if let Some(reason) = stop.reason() {
            return Ok(reason);
        }
        screen.draw(deck.page(nav.cursor()))?;
        if let Some(reason) = stop.wait_timeout(interval) {
            return Ok(reason);
        }
        if let Transition::Exited(reason) = nav.apply(Command::Next) {
            return Ok(reason);
        }
    }
}

/// Raises `stop` on the quit key. Returns once either signal is raised.
fn listen_for_quit<E: EventSource>(
    events: &mut E,
    stop: &StopSignal,
    finished: &StopSignal,
) -> io::Result<()> {
    while !finished.is_raised() && !stop.is_raised() {
        match events.poll(LISTEN_TIMEOUT) {
            Ok(Some(SlideEvent::Command(Command::Quit))) => {
                info!("Quit key during auto playback");
                stop.raise(ExitReason::Quit);
            }
            Ok(_) => {}
            Err(e) => {
                // Without input nobody could stop the show
                stop.raise(ExitReason::Quit);
                return Err(e);
            }
        }
    }
    Ok(())
}
