use std::io;

use thiserror::Error;

/// Everything that can go wrong before and around the machine. Faults
/// inside the instruction stream (unknown opcodes, a blown call stack)
/// halt the machine instead of surfacing here.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O errors, e.g. reading a ROM file
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// the program doesn't fit between the entry point and the top of RAM
    #[error("program is {size} bytes but only {max} fit above the entry point")]
    ProgramTooLarge { size: usize, max: usize },

    /// errors from the crossterm terminal backend
    ///
    /// `crossterm::ErrorKind` is a type alias for `std::io::Error`, so a
    /// `#[from]` here would conflict with the `Io` variant's conversion.
    /// Crossterm failures surface through `Io`.
    #[error("terminal error: {0}")]
    Terminal(crossterm::ErrorKind),
}
