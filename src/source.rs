//! # Text Sources
//!
//! Where the presentation text comes from:
//!
//! - no argument: whatever is piped into stdin (nothing if stdin is a terminal)
//! - `-`: lines typed on stdin, up to the first empty line
//! - anything else: a file path
//!
//! Bytes are decoded with the requested encoding, then Shift_JIS, then
//! UTF-8; the first that decodes cleanly wins. A BOM overrides all three.
//!
//! Everything here runs before the terminal is switched into raw mode, so
//! failures can be reported on stderr as plain text.

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};
use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Read};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Pipe,
    Stdin,
    File(PathBuf),
}

#[derive(Debug)]
pub enum SourceError {
    Io { path: PathBuf, source: io::Error },
    Stdin(io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            SourceError::Stdin(e) => write!(f, "failed to read stdin: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io { source, .. } => Some(source),
            SourceError::Stdin(e) => Some(e),
        }
    }
}

impl Source {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Source::Pipe,
            Some("-") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
        }
    }

    /// Reads and decodes the text. An empty result is valid; the caller
    /// falls back to the help deck.
    pub fn read(&self, encoding: &str) -> Result<String, SourceError> {
        let bytes = match self {
            Source::Pipe => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    debug!("stdin is a terminal and no file was given");
                    return Ok(String::new());
                }
                let mut bytes = Vec::new();
                stdin
                    .lock()
                    .read_to_end(&mut bytes)
                    .map_err(SourceError::Stdin)?;
                bytes
            }
            Source::Stdin => {
                read_until_blank_line(io::stdin().lock()).map_err(SourceError::Stdin)?
            }
            Source::File(path) => fs::read(path).map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            })?,
        };
        let text = decode(&bytes, encoding);
        info!("Read {} bytes from {:?}", bytes.len(), self);
        Ok(text)
    }
}

/// Collects lines until the first empty one, keeping a `\n` after each.
/// A trailing `\r` counts as part of the line break.
pub fn read_until_blank_line(mut reader: impl BufRead) -> io::Result<Vec<u8>> {
    let mut text = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let content = line.strip_suffix(b"\n").unwrap_or(&line);
        let content = content.strip_suffix(b"\r").unwrap_or(content);
        if content.is_empty() {
            break;
        }
        text.extend_from_slice(content);
        text.push(b'\n');
    }
    Ok(text)
}

/// Decodes `bytes`, trying `label` first, then Shift_JIS, then UTF-8.
/// Unknown labels are skipped. When nothing decodes cleanly the text is
/// read as UTF-8 with U+FFFD replacements.
pub fn decode(bytes: &[u8], label: &str) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        debug!("Found {} byte order mark", encoding.name());
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }

    let requested = if label.is_empty() {
        None
    } else {
        let encoding = Encoding::for_label(label.trim().as_bytes());
        if encoding.is_none() {
            warn!("Unknown encoding {label:?}, trying Shift_JIS and UTF-8");
        }
        encoding
    };

    for encoding in requested.into_iter().chain([SHIFT_JIS, UTF_8]) {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            debug!("Decoded input as {}", encoding.name());
            return text.into_owned();
        }
    }

    warn!("Input is not valid in any candidate encoding, decoding lossily");
    String::from_utf8_lossy(bytes).into_owned()
}
