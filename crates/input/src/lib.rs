//! Terminal input: one keystroke at a time.
//!
//! This module is intentionally independent of prompt semantics. It switches
//! the terminal into raw mode for the duration of a single read, decodes one
//! character and restores the terminal, whatever happens during the read.

pub mod raw;
pub mod script;
pub mod source;

pub use keyprompt_types as types;

pub use raw::RawModeGuard;
pub use script::ScriptedSource;
pub use source::{read_utf8_char, CharSource, TerminalSource};
