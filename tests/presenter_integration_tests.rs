use pera::core::config::PlaybackMode;
use pera::core::deck::Deck;
use pera::core::navigation::{Command, ExitReason};
use pera::core::signal::StopSignal;
use pera::tui::event::{EventSource, SlideEvent};
use pera::tui::present;
use pera::tui::screen::Screen;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

// ============================================================================
// Helper Functions
// ============================================================================

const CLEAR_HOME: &str = "\x1b[2J\x1b[1;1H";
const CLEAR_LINE: &str = "\x1b[2K";

/// Replays keys one per poll, each after a short pause, then stays idle.
struct Keys(VecDeque<SlideEvent>);

const KEY_PAUSE: Duration = Duration::from_millis(20);

impl Keys {
    fn new(commands: &[Command]) -> Self {
        Self(commands.iter().copied().map(SlideEvent::Command).collect())
    }
}

impl EventSource for Keys {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<SlideEvent>> {
        match self.0.pop_front() {
            Some(event) => {
                thread::sleep(timeout.min(KEY_PAUSE));
                Ok(Some(event))
            }
            None => {
                thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}

/// A writer the test can read back after the screen is done with it.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Splits the output into frames, dropping the trailing teardown.
fn frames(output: &str) -> Vec<&str> {
    let mut frames: Vec<&str> = output.split(CLEAR_HOME).skip(1).collect();
    assert_eq!(frames.pop(), Some(""), "output must end with one teardown");
    frames
}

fn row(text: &str) -> String {
    format!("{CLEAR_LINE}{text}")
}

// ============================================================================
// Manual Mode
// ============================================================================

#[test]
fn test_manual_walk_through_deck() {
    let deck = Deck::from_text("Title\r\n---\r\nMiddle\r\n---\r\nEnd");
    let buffer = SharedBuffer::default();
    let mut screen = Screen::with_size(buffer.clone(), false, 40, 3);
    let mut keys = Keys::new(&[Command::Next, Command::Next, Command::Previous, Command::Quit]);

    let reason = present(
        &mut screen,
        &mut keys,
        &deck,
        PlaybackMode::Manual,
        false,
        &StopSignal::new(),
    )
    .unwrap();

    assert_eq!(reason, ExitReason::Quit);
    let output = buffer.contents();
    let expected: Vec<String> = ["Title", "Middle", "End", "Middle"]
        .iter()
        .map(|text| format!("{}\r\n", row(text)))
        .collect();
    assert_eq!(frames(&output), expected);
}

#[test]
fn test_manual_gravity_fills_the_viewport() {
    let deck = Deck::from_text("top\nbottom");
    let buffer = SharedBuffer::default();
    let mut screen = Screen::with_size(buffer.clone(), true, 40, 4);
    let mut keys = Keys::new(&[Command::Quit]);

    present(
        &mut screen,
        &mut keys,
        &deck,
        PlaybackMode::Manual,
        false,
        &StopSignal::new(),
    )
    .unwrap();

    let output = buffer.contents();
    let expected = format!(
        "{}\r\n{}\r\n{}\r\n{}",
        row(""),
        row(""),
        row("top"),
        row("bottom")
    );
    assert_eq!(frames(&output), vec![expected.as_str()]);
}

#[test]
fn test_empty_input_presents_help() {
    let deck = Deck::from_text("");
    assert_eq!(deck, Deck::help());

    let buffer = SharedBuffer::default();
    let mut screen = Screen::with_size(buffer.clone(), false, 80, 24);
    let mut keys = Keys::new(&[Command::Previous]);

    let reason = present(
        &mut screen,
        &mut keys,
        &deck,
        PlaybackMode::Manual,
        false,
        &StopSignal::new(),
    )
    .unwrap();

    assert_eq!(reason, ExitReason::StartOfDeck);
    assert!(buffer.contents().contains("pera"));
}

// ============================================================================
// Auto Mode
// ============================================================================

#[test]
fn test_auto_plays_three_pages_then_stops() {
    let deck = Deck::from_text("a\n---\nb\n---\nc");
    let buffer = SharedBuffer::default();
    let mut screen = Screen::with_size(buffer.clone(), false, 10, 5);
    let mut keys = Keys::new(&[]);

    let reason = present(
        &mut screen,
        &mut keys,
        &deck,
        PlaybackMode::from_interval_ms(10),
        false,
        &StopSignal::new(),
    )
    .unwrap();

    assert_eq!(reason, ExitReason::EndOfDeck);
    assert_eq!(screen.frames_drawn(), 3);
    let output = buffer.contents();
    let expected: Vec<String> = ["a", "b", "c"]
        .iter()
        .map(|text| format!("{}\r\n", row(text)))
        .collect();
    assert_eq!(frames(&output), expected);
}

#[test]
fn test_auto_quit_key_ends_loop() {
    let deck = Deck::from_text("a\n---\nb");
    let buffer = SharedBuffer::default();
    let mut screen = Screen::with_size(buffer.clone(), false, 10, 5);
    // Listener sees a few idle keys, then Esc
    let mut keys = Keys(
        [
            SlideEvent::Ignored,
            SlideEvent::Command(Command::Next),
            SlideEvent::Command(Command::Quit),
        ]
        .into(),
    );

    let reason = present(
        &mut screen,
        &mut keys,
        &deck,
        PlaybackMode::from_interval_ms(60_000),
        true,
        &StopSignal::new(),
    )
    .unwrap();

    // Next keys mean nothing in auto mode; only the quit key counts
    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(screen.frames_drawn(), 1);
    assert_eq!(frames(&buffer.contents()).len(), 1);
}

#[test]
fn test_stop_raised_from_another_thread() {
    let deck = Deck::from_text("a\n---\nb");
    let buffer = SharedBuffer::default();
    let mut screen = Screen::with_size(buffer.clone(), false, 10, 5);
    let mut keys = Keys::new(&[]);
    let stop = Arc::new(StopSignal::new());

    let raiser = {
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            stop.raise(ExitReason::Interrupted);
        })
    };

    let reason = present(
        &mut screen,
        &mut keys,
        &deck,
        PlaybackMode::from_interval_ms(60_000),
        true,
        &stop,
    )
    .unwrap();
    raiser.join().unwrap();

    assert_eq!(reason, ExitReason::Interrupted);
    assert_eq!(frames(&buffer.contents()).len(), 1);
}
