//! Input capability consumed by the `,` instruction.

use std::collections::VecDeque;
use std::io::Read;

/// Yields user input one byte at a time.
///
/// This is the interpreter's only external boundary: whoever embeds the
/// engine decides where input comes from. `None` means the source is
/// exhausted, which the engine reports as a failure rather than silently
/// defaulting the cell.
pub trait Scanner {
    /// Returns the next input byte, or `None` when no more input is
    /// available.
    fn next_byte(&mut self) -> Option<u8>;
}

/// Console-backed scanner: reads exactly one byte from stdin per call.
#[derive(Debug, Default)]
pub struct StdinScanner;

impl Scanner for StdinScanner {
    fn next_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match std::io::stdin().read(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf[0]),
        }
    }
}

/// Scanner serving a fixed byte sequence, for tests and embedding.
#[derive(Debug, Clone)]
pub struct ScriptedScanner {
    bytes: VecDeque<u8>,
}

impl ScriptedScanner {
    pub fn new(input: &str) -> Self {
        Self {
            bytes: input.bytes().collect(),
        }
    }
}

impl Scanner for ScriptedScanner {
    fn next_byte(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }
}
