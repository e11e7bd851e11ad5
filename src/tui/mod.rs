//! # TUI Adapter
//!
//! The crossterm-specific layer. Owns the terminal for the length of one
//! session, turns key presses into navigation commands and writes frames.
//!
//! This is the only module that talks to a real terminal. Everything it
//! drives (`Deck`, `Navigator`, `Frame`) is pure and lives in `core`.
//!
//! ## Session lifecycle
//!
//! ```text
//! run()
//! ├── TerminalModeGuard   raw mode, alternate screen, hidden cursor
//! ├── SignalGuard         SIGINT / SIGTERM → StopSignal(Interrupted)
//! └── present()
//!     ├── Manual → run_manual()   render, block on key, render
//!     ├── Auto   → run_auto()     timer loop + listener thread
//!     └── Screen::teardown()      exactly once, whatever the exit path
//! ```

pub mod autoplay;
pub mod event;
pub mod manual;
pub mod screen;

use log::{info, warn};
use std::io::{self, Write, stdout};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use crate::core::config::{PlaybackMode, ResolvedConfig};
use crate::core::deck::Deck;
use crate::core::navigation::ExitReason;
use crate::core::signal::StopSignal;
use crate::tui::autoplay::run_auto;
use crate::tui::event::{CrosstermEvents, EventSource};
use crate::tui::manual::run_manual;
use crate::tui::screen::Screen;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        info!("Terminal modes enabled (raw mode, alternate screen, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Forwards SIGINT / SIGTERM into the session's stop signal until dropped.
#[cfg(unix)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new(stop: Arc<StopSignal>) -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        let mut signals = Signals::new([SIGINT, SIGTERM])?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            for signal in signals.forever() {
                warn!("Signal {} received, ending presentation", signal);
                stop.raise(ExitReason::Interrupted);
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Plays `deck` on `screen` in the given mode, then tears the screen down
/// exactly once, even when playback failed.
pub fn present<W: Write, E: EventSource>(
    screen: &mut Screen<W>,
    events: &mut E,
    deck: &Deck,
    mode: PlaybackMode,
    looping: bool,
    stop: &StopSignal,
) -> io::Result<ExitReason> {
    let outcome = match mode {
        PlaybackMode::Manual => run_manual(screen, events, deck, looping, stop),
        PlaybackMode::Auto(interval) => run_auto(screen, events, deck, interval, looping, stop),
    };
    let teardown = screen.teardown();

    let reason = outcome?;
    teardown?;
    info!(
        "Presentation ended: {:?} after {} frames",
        reason,
        screen.frames_drawn()
    );
    Ok(reason)
}

/// Runs a full-screen session on the real terminal.
pub fn run(deck: &Deck, config: &ResolvedConfig) -> io::Result<ExitReason> {
    let stop = Arc::new(StopSignal::new());

    let _terminal_mode_guard = TerminalModeGuard::new()?;
    #[cfg(unix)]
    let _signal_guard = match SignalGuard::new(Arc::clone(&stop)) {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not install signal handlers: {}", e);
            None
        }
    };

    let mut screen = Screen::new(stdout(), config.gravity);
    let mut events = CrosstermEvents;
    present(
        &mut screen,
        &mut events,
        deck,
        config.mode,
        config.looping,
        &stop,
    )
}
