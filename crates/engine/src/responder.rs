//! The response loop.
//!
//! Each attempt prints the prompt, reads one keystroke and classifies it:
//!
//! - whitespace selects the default response, if there is one
//! - the help character prints the help listing and asks again without
//!   using up an attempt
//! - anything else is lowercased and checked against the valid responses
//!
//! A bad response is reported on the error stream and the user is asked
//! again, until the retry limit (if any) is exceeded. End of input stops the
//! loop straight away since nothing more can ever be read.

use std::io::{self, Stderr, Stdin, Stdout, Write};

use log::{debug, trace, warn};

use crate::core::{PromptConfig, ResponseError, TextFormatter};
use crate::input::{CharSource, TerminalSource};
use crate::respond::Respond;
use crate::term::Wrapper;
use crate::terminate::{ProcessExit, Terminate};
use crate::types::{Indents, ERR_EXIT_STATUS, HELP_CHAR};

/// Outcome of classifying a single keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The user asked for the help listing.
    Help,
    /// A valid response, after default substitution and case folding.
    Accept(char),
}

/// Classify one character read from the user.
///
/// The help character is compared before case folding. Whitespace maps to
/// the default only when a default is configured; otherwise it is an
/// ordinary (invalid) response.
pub fn classify(config: &PromptConfig, c: char) -> Result<Choice, ResponseError> {
    if let Some(default) = config.default_response() {
        if c.is_whitespace() {
            return Ok(Choice::Accept(default));
        }
    }

    if c == HELP_CHAR {
        return Ok(Choice::Help);
    }

    let folded = fold_case(c);
    if config.is_valid(folded) {
        Ok(Choice::Accept(folded))
    } else {
        Err(ResponseError::Invalid(folded))
    }
}

/// Lowercase to a single character. Where the full lowercase form is longer
/// (e.g. 'İ' becomes "i\u{307}"), the leading character is kept.
fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Prompts on a terminal (or any reader and writers) for a valid response.
pub struct Responder<S = TerminalSource<Stdin>, O = Stdout, E = Stderr> {
    config: PromptConfig,
    source: S,
    out: O,
    err: E,
    formatter: Box<dyn TextFormatter>,
    terminator: Box<dyn Terminate>,
}

impl Responder {
    /// Prompt on standard output, reading keystrokes from standard input.
    pub fn new(config: PromptConfig) -> Self {
        Self::with_io(config, TerminalSource::stdin(), io::stdout(), io::stderr())
            .with_formatter(Wrapper::for_terminal())
    }
}

impl<S, O, E> Responder<S, O, E>
where
    S: CharSource,
    O: Write,
    E: Write,
{
    pub fn with_io(config: PromptConfig, source: S, out: O, err: E) -> Self {
        Self {
            config,
            source,
            out,
            err,
            formatter: Box::new(Wrapper::default()),
            terminator: Box::new(ProcessExit),
        }
    }

    pub fn with_formatter(mut self, formatter: impl TextFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn with_terminator(mut self, terminator: impl Terminate + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    pub fn errors(&self) -> &E {
        &self.err
    }

    pub fn into_parts(self) -> (PromptConfig, S, O, E) {
        (self.config, self.source, self.out, self.err)
    }

    /// Print the prompt and the valid responses.
    pub fn print_prompt(&mut self) -> io::Result<()> {
        self.config.write_prompt(&mut self.out)?;
        self.out.flush()
    }

    /// Print the valid responses, e.g. `([y]/n/?): `.
    pub fn print_valid_responses(&mut self) -> io::Result<()> {
        self.config.write_valid_responses(&mut self.out)?;
        self.out.flush()
    }

    /// Print the help listing at the configured continuation indent.
    pub fn print_help(&mut self) -> io::Result<()> {
        self.print_help_indent(self.config.indents().rest)
    }

    pub fn print_help_indent(&mut self, indent: usize) -> io::Result<()> {
        self.config
            .write_help(&mut self.out, self.formatter.as_ref(), indent)?;
        self.out.flush()
    }

    /// Start a session that prompts with the given indents.
    pub fn session(&mut self, first: usize, rest: usize) -> Session<'_, S, O, E> {
        Session {
            responder: self,
            indents: Indents::new(first, rest),
            attempts: 0,
            prompts: 0,
        }
    }

    /// Report `err` and terminate. The message is indented from the
    /// configured continuation indent, whatever indents the call used.
    fn die(&mut self, err: &ResponseError) -> ! {
        let pad = self.config.indents().list();
        // Nothing useful can be done if stderr is gone; exit regardless.
        let _ = writeln!(self.err);
        let _ = writeln!(self.err, "{:pad$}{}", "", err);
        let _ = self.err.flush();
        self.terminator.terminate(ERR_EXIT_STATUS)
    }
}

impl<S, O, E> Respond for Responder<S, O, E>
where
    S: CharSource,
    O: Write,
    E: Write,
{
    fn get_response(&mut self) -> Result<char, ResponseError> {
        let indents = self.config.indents();
        self.get_response_indent(indents.first, indents.rest)
    }

    fn get_response_or_die(&mut self) -> char {
        let indents = self.config.indents();
        self.get_response_indent_or_die(indents.first, indents.rest)
    }

    fn get_response_indent(&mut self, first: usize, rest: usize) -> Result<char, ResponseError> {
        self.session(first, rest).run()
    }

    fn get_response_indent_or_die(&mut self, first: usize, rest: usize) -> char {
        match self.get_response_indent(first, rest) {
            Ok(c) => c,
            Err(err) => self.die(&err),
        }
    }
}

/// State for one call to collect a response.
pub struct Session<'r, S, O, E> {
    responder: &'r mut Responder<S, O, E>,
    indents: Indents,
    attempts: u32,
    prompts: u32,
}

impl<S, O, E> Session<'_, S, O, E>
where
    S: CharSource,
    O: Write,
    E: Write,
{
    /// Attempts counted against the retry limit. Help requests are not counted.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn prompts_issued(&self) -> u32 {
        self.prompts
    }

    pub fn indents(&self) -> Indents {
        self.indents
    }

    pub fn run(&mut self) -> Result<char, ResponseError> {
        loop {
            self.prompt().map_err(ResponseError::write)?;

            match self.read_choice() {
                Ok(Choice::Help) => {
                    trace!("help requested");
                    self.responder
                        .print_help_indent(self.indents.rest)
                        .map_err(ResponseError::write)?;
                }
                Ok(Choice::Accept(c)) => {
                    self.attempts += 1;
                    return Ok(c);
                }
                Err(err) => {
                    self.attempts += 1;

                    if !err.is_retryable() {
                        debug!("giving up after attempt {}: {err}", self.attempts);
                        return Err(err);
                    }

                    if let Some(max) = self.responder.config.max_retries() {
                        if self.attempts > max {
                            warn!("no valid response after {} attempts", self.attempts);
                            return Err(ResponseError::RetriesExhausted {
                                attempts: self.attempts,
                                last: Box::new(err),
                            });
                        }
                    }

                    debug!("attempt {} rejected: {err}", self.attempts);
                    self.report(&err).map_err(ResponseError::write)?;
                }
            }
        }
    }

    fn prompt(&mut self) -> io::Result<()> {
        let pad = self.indents.for_prompt(self.prompts);
        self.prompts += 1;

        let r = &mut *self.responder;
        write!(r.out, "{:pad$}", "")?;
        r.config.write_prompt(&mut r.out)?;
        r.out.flush()
    }

    fn read_choice(&mut self) -> Result<Choice, ResponseError> {
        let c = self
            .responder
            .source
            .read_char()
            .map_err(ResponseError::read)?
            .ok_or(ResponseError::InputClosed)?;
        classify(&self.responder.config, c)
    }

    fn report(&mut self, err: &ResponseError) -> io::Result<()> {
        let out = &mut self.responder.err;
        writeln!(out)?;
        writeln!(out, "{:pad$}{}", "", err, pad = self.indents.list())?;
        out.flush()
    }
}
