//! Error types for building prompts and collecting responses.

use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::types::HELP_CHAR;

/// Errors returned while validating a prompt configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("too few allowed responses ({0}) - there must be at least 2")]
    TooFewResponses(usize),
    #[error("only lowercase responses are allowed - '{0}' is uppercase")]
    Uppercase(char),
    #[error(
        "a whitespace character ({}) is not an allowed response - it is used to select the default response",
        .0.escape_debug()
    )]
    Whitespace(char),
    #[error("a control character ({}) is not an allowed response", .0.escape_debug())]
    Control(char),
    #[error("'{}' is not an allowed response - it is used to request help", HELP_CHAR)]
    HelpChar,
    #[error("the default response ({0}) is not in the list of valid responses")]
    UnknownDefault(char),
    #[error("the maximum number of reprompts ({0}) must be greater than 0")]
    MaxRetries(i32),
    #[error("the {which} indent ({value}) must be greater than or equal to 0")]
    NegativeIndent { which: &'static str, value: i32 },
}

/// Errors produced while collecting a response.
///
/// Cloneable so a fixed response can hand out the same error repeatedly.
#[derive(Debug, Clone, Error)]
pub enum ResponseError {
    /// The character read is not one of the valid responses.
    #[error("Bad response: {}", .0.escape_debug())]
    Invalid(char),
    /// More bad responses than the retry limit allows.
    #[error("too many bad responses ({attempts}): {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<ResponseError>,
    },
    /// The input stream has ended.
    #[error("no response: the input has been closed")]
    InputClosed,
    /// Reading from the input device failed.
    #[error("cannot read the response: {0}")]
    Read(Arc<io::Error>),
    /// Writing the prompt or help text failed.
    #[error("cannot write the prompt: {0}")]
    Write(Arc<io::Error>),
}

impl ResponseError {
    pub fn read(err: io::Error) -> Self {
        Self::Read(Arc::new(err))
    }

    pub fn write(err: io::Error) -> Self {
        Self::Write(Arc::new(err))
    }

    /// Whether another prompt may follow this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Read(_))
    }

    /// The rejected character, if this error carries one.
    pub fn rejected(&self) -> Option<char> {
        match self {
            Self::Invalid(c) => Some(*c),
            Self::RetriesExhausted { last, .. } => last.rejected(),
            _ => None,
        }
    }
}
