//! The query interface shared by real and fixed responders.

use crate::core::ResponseError;

/// Asks for a single-character response.
pub trait Respond {
    /// Prompt using the configured indents.
    fn get_response(&mut self) -> Result<char, ResponseError>;

    /// As [`Respond::get_response`], but terminates the process on error.
    fn get_response_or_die(&mut self) -> char;

    /// Prompt using explicit indents for the first and subsequent lines.
    fn get_response_indent(&mut self, first: usize, rest: usize) -> Result<char, ResponseError>;

    /// As [`Respond::get_response_indent`], but terminates the process on error.
    fn get_response_indent_or_die(&mut self, first: usize, rest: usize) -> char;
}
