//! Terminal text output helpers.
//!
//! Provides [`Wrapper`], the default [`TextFormatter`](keyprompt_core::TextFormatter)
//! used to print help listings. It wraps at word boundaries and can size
//! itself to the current terminal.

pub mod wrap;

pub use keyprompt_core as core;
pub use keyprompt_types as types;

pub use wrap::Wrapper;
