//! A responder that always gives the same answer.

use crate::core::ResponseError;
use crate::respond::Respond;
use crate::terminate::{ProcessExit, Terminate};
use crate::types::ERR_EXIT_STATUS;

/// Always returns the given response or error, without any I/O.
///
/// Intended for testing code that asks questions. No checks are made on the
/// response, so it may be something a real prompt could never produce, such
/// as an uppercase letter or whitespace.
pub struct FixedResponse {
    response: char,
    err: Option<ResponseError>,
    terminator: Box<dyn Terminate>,
}

impl std::fmt::Debug for FixedResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedResponse")
            .field("response", &self.response)
            .field("err", &self.err)
            .finish_non_exhaustive()
    }
}

impl FixedResponse {
    pub fn new(response: char) -> Self {
        Self {
            response,
            err: None,
            terminator: Box::new(ProcessExit),
        }
    }

    /// Always fail with `err`. The response is still reported by [`Self::response`].
    pub fn failing(response: char, err: ResponseError) -> Self {
        Self {
            err: Some(err),
            ..Self::new(response)
        }
    }

    pub fn with_terminator(mut self, terminator: impl Terminate + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    pub fn response(&self) -> char {
        self.response
    }

    pub fn error(&self) -> Option<&ResponseError> {
        self.err.as_ref()
    }

    fn result(&self) -> Result<char, ResponseError> {
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(self.response),
        }
    }
}

impl Respond for FixedResponse {
    fn get_response(&mut self) -> Result<char, ResponseError> {
        self.result()
    }

    fn get_response_or_die(&mut self) -> char {
        if self.err.is_some() {
            self.terminator.terminate(ERR_EXIT_STATUS);
        }
        self.response
    }

    fn get_response_indent(&mut self, _first: usize, _rest: usize) -> Result<char, ResponseError> {
        self.result()
    }

    fn get_response_indent_or_die(&mut self, _first: usize, _rest: usize) -> char {
        self.get_response_or_die()
    }
}
