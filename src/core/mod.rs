//! # Core Presentation Logic
//!
//! Everything that decides what is on screen, with no terminal attached.
//!
//! ```text
//!   text ──► deck ──► navigation ──► frame ──► bytes
//!            │        │              │
//!            │        │ cursor,      │ rows for one
//!            │ pages  │ wrap / exit  │ viewport
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: splits text into pages on `---` lines
//! - [`navigation`]: the page cursor and its boundary rules
//! - [`frame`]: lays a page out on a viewport and encodes the redraw
//! - [`signal`]: the stop flag shared by auto mode's two threads
//! - [`config`]: settings from file, environment and CLI

pub mod config;
pub mod deck;
pub mod frame;
pub mod help;
pub mod navigation;
pub mod signal;
