//! # crisp8
//!
//! A CHIP-8 byte-code interpreter plus the handful of collaborators it
//! needs to be a usable emulator in a terminal.
//!
//! ## Design
//!
//! * the machine is a single mutable aggregate ([`machine::Machine`]):
//!   4K of memory, sixteen V registers, I, PC, a 12-deep call stack,
//!   the 64x32 monochrome framebuffer, two timers and the hex keypad
//! * one `step()` = fetch two bytes at PC, decode, advance PC by 2,
//!   dispatch on the top nibble. skip opcodes add a further 2; jumps
//!   and calls overwrite PC outright
//! * unknown opcodes halt the machine with a diagnostic rather than
//!   silently corrupting it. a runtime flag lets a driver carry on past
//!   them instead
//! * the outside world lives behind traits so alternatives can be
//!   plugged in:
//!    - [`display::Display`] takes the framebuffer once per frame
//!    - [`input::Input`] fills the keypad and carries pause/quit requests
//!    - [`sound::Sound`] is a single on/off tone toggle
//! * the driver owns the clocks: timers tick at 60Hz through
//!   `tick_delay`/`tick_sound`, instructions run at several `step`s per
//!   tick. the two cadences are deliberately not coupled
pub mod display;
pub mod error;
pub mod input;
pub mod instruction;
mod interpreter;
pub mod machine;
pub mod sound;
