//! The Brainfudge execution engine.
//!
//! The engine owns the program, the register tape, both cursors, and the
//! accumulated output. Each dispatch step computes the next instruction
//! pointer value; bracket instructions resolve their counterpart through
//! [`find_match`](crate::matcher::find_match) at the moment a jump decision
//! needs it.

use crate::matcher::find_match;
use crate::scanner::{Scanner, StdinScanner};

/// Errors that abort a Brainfudge run.
///
/// All three are fatal; nothing is caught or retried internally. Each
/// carries the index of the instruction at which it was detected.
#[derive(Debug, thiserror::Error)]
pub enum BrainfudgeError {
    /// The register cursor would have moved left of index 0.
    #[error("register cursor out of range at instruction {ip}")]
    CursorOutOfRange { ip: usize },

    /// A `[` or `]` whose structural counterpart does not exist within the
    /// program's bounds.
    #[error("unmatched '{bracket}' at instruction {ip}")]
    UnmatchedBracket { ip: usize, bracket: char },

    /// A `,` instruction found the input source exhausted.
    #[error("input exhausted at instruction {ip}")]
    InputExhausted { ip: usize },
}

/// The eight recognized instructions. Any other character in a program is
/// an inert no-op (the language's comment convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `+`: increment the active register, wrapping modulo 256.
    Increment,
    /// `-`: decrement the active register, wrapping modulo 256.
    Decrement,
    /// `>`: advance the cursor, growing the tape by one zero cell on
    /// crossing the right edge.
    NextRegister,
    /// `<`: retreat the cursor; out of range below index 0.
    PrevRegister,
    /// `.`: append the active register's char to the output.
    Print,
    /// `,`: read one input byte into the active register.
    Read,
    /// `[`: jump past the matching `]` when the active register is 0.
    OpenBracket,
    /// `]`: jump back to the matching `[` when the active register is
    /// non-zero.
    CloseBracket,
}

impl Instruction {
    /// Maps a program character to its instruction, or `None` for comment
    /// characters.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Increment),
            '-' => Some(Self::Decrement),
            '>' => Some(Self::NextRegister),
            '<' => Some(Self::PrevRegister),
            '.' => Some(Self::Print),
            ',' => Some(Self::Read),
            '[' => Some(Self::OpenBracket),
            ']' => Some(Self::CloseBracket),
            _ => None,
        }
    }
}

/// A Brainfudge interpreter.
///
/// The interpreter maintains:
/// - the program as an immutable sequence of characters,
/// - a register tape that starts as a single zero cell and grows rightward
///   on demand (it never shrinks),
/// - a cursor addressing the active register,
/// - an instruction pointer, and
/// - the output accumulated by `.` instructions.
///
/// Each run is a fresh instance; nothing persists across runs.
pub struct Brainfudge {
    program: Vec<char>,
    registers: Vec<u8>,
    register_idx: usize,
    program_idx: usize,
    output: String,
    scanner: Box<dyn Scanner>,
}

impl Brainfudge {
    /// Runs a program to completion and returns its output.
    ///
    /// Input for `,` comes from stdin, one byte per instruction.
    pub fn run(program: &str) -> Result<String, BrainfudgeError> {
        Self::new(program).process()
    }

    /// Creates an interpreter with a console-backed input source.
    pub fn new(program: &str) -> Self {
        Self::with_scanner(program, StdinScanner)
    }

    /// Creates an interpreter reading input from the given scanner.
    pub fn with_scanner(program: &str, scanner: impl Scanner + 'static) -> Self {
        Self {
            program: program.chars().collect(),
            registers: vec![0],
            register_idx: 0,
            program_idx: 0,
            output: String::new(),
            scanner: Box::new(scanner),
        }
    }

    /// Drives dispatch until the instruction pointer reaches the end of the
    /// program, then returns the accumulated output.
    pub fn process(&mut self) -> Result<String, BrainfudgeError> {
        while self.step()? {}
        Ok(self.output.clone())
    }

    /// Dispatches a single instruction.
    ///
    /// Returns `Ok(false)` once the instruction pointer has reached the
    /// program length, `Ok(true)` otherwise. Unrecognized characters advance
    /// the pointer without any other effect.
    pub fn step(&mut self) -> Result<bool, BrainfudgeError> {
        if self.program_idx >= self.program.len() {
            return Ok(false);
        }

        self.program_idx = match Instruction::from_char(self.program[self.program_idx]) {
            Some(instruction) => self.dispatch(instruction)?,
            None => self.program_idx + 1,
        };

        Ok(true)
    }

    /// The output accumulated so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The register tape contents.
    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    /// The index of the active register.
    pub fn cursor(&self) -> usize {
        self.register_idx
    }

    /// The index of the next instruction to dispatch.
    pub fn instruction_pointer(&self) -> usize {
        self.program_idx
    }

    /// Executes one instruction and returns the next instruction pointer
    /// value. Every handler advances by one except the bracket jumps.
    fn dispatch(&mut self, instruction: Instruction) -> Result<usize, BrainfudgeError> {
        match instruction {
            Instruction::Increment => {
                let cell = &mut self.registers[self.register_idx];
                *cell = cell.wrapping_add(1);
                Ok(self.program_idx + 1)
            }
            Instruction::Decrement => {
                let cell = &mut self.registers[self.register_idx];
                *cell = cell.wrapping_sub(1);
                Ok(self.program_idx + 1)
            }
            Instruction::NextRegister => {
                self.register_idx += 1;
                // Crossing the right edge grows the tape by exactly one cell.
                if self.register_idx == self.registers.len() {
                    self.registers.push(0);
                }
                Ok(self.program_idx + 1)
            }
            Instruction::PrevRegister => {
                if self.register_idx == 0 {
                    return Err(BrainfudgeError::CursorOutOfRange {
                        ip: self.program_idx,
                    });
                }
                self.register_idx -= 1;
                Ok(self.program_idx + 1)
            }
            Instruction::Print => {
                self.output.push(self.registers[self.register_idx] as char);
                Ok(self.program_idx + 1)
            }
            Instruction::Read => {
                let byte =
                    self.scanner
                        .next_byte()
                        .ok_or(BrainfudgeError::InputExhausted {
                            ip: self.program_idx,
                        })?;
                self.registers[self.register_idx] = byte;
                Ok(self.program_idx + 1)
            }
            Instruction::OpenBracket => {
                // The lookup only happens on the branch that needs it; a
                // `[` guarding a non-zero register never resolves its match.
                if self.registers[self.register_idx] == 0 {
                    let close = self.find_bracket(true)?;
                    Ok(close + 1)
                } else {
                    Ok(self.program_idx + 1)
                }
            }
            Instruction::CloseBracket => {
                // Resolved unconditionally: a bare `]` is an error even when
                // the active register is 0 and no jump would occur.
                let open = self.find_bracket(false)?;
                if self.registers[self.register_idx] != 0 {
                    Ok(open)
                } else {
                    Ok(self.program_idx + 1)
                }
            }
        }
    }

    fn find_bracket(&self, forward: bool) -> Result<usize, BrainfudgeError> {
        find_match(&self.program, '[', ']', self.program_idx, forward).ok_or(
            BrainfudgeError::UnmatchedBracket {
                ip: self.program_idx,
                bracket: if forward { '[' } else { ']' },
            },
        )
    }
}
