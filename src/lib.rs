//! A tiny Brainfudge interpreter library.
//!
//! This crate provides a minimal interpreter for the Brainfudge esoteric
//! language: eight single-character instructions over a growable tape of
//! 8-bit registers.
//!
//! Features and behaviors:
//! - The tape starts as a single zero cell and grows rightward on demand,
//!   one cell at a time; it never shrinks.
//! - Register arithmetic wraps modulo 256 in both directions.
//! - Moving the cursor left of register 0 returns an error; there is no
//!   leftward growth or wrap.
//! - Input `,` pulls one byte from a pluggable [`Scanner`] (stdin by
//!   default); an exhausted scanner is an error, not a silent default.
//! - Output `.` accumulates into a string returned when the run completes.
//! - Loops `[]` nest; an unmatched bracket is reported at the instruction
//!   that needed its counterpart, with no up-front validation pass.
//! - Any character outside the instruction set is an inert no-op, the
//!   language's comment convention.
//!
//! Quick start:
//!
//! ```
//! use brainfudge::Brainfudge;
//!
//! let output = Brainfudge::run("----[---->+<]>++.").expect("program should run");
//! assert_eq!(output, "A");
//! ```

pub mod cli_util;
mod interpreter;
mod matcher;
mod scanner;

pub use interpreter::{Brainfudge, BrainfudgeError, Instruction};
pub use matcher::find_match;
pub use scanner::{Scanner, ScriptedScanner, StdinScanner};
