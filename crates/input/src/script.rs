//! Scripted input for driving prompts without a terminal.

use std::collections::VecDeque;
use std::io;

use crate::source::CharSource;

/// Plays back a fixed sequence of characters and read errors.
///
/// Once the script runs out every read reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<io::Result<char>>,
    reads: usize,
}

impl ScriptedSource {
    pub fn new(input: &str) -> Self {
        Self {
            script: input.chars().map(Ok).collect(),
            reads: 0,
        }
    }

    pub fn push_char(mut self, c: char) -> Self {
        self.script.push_back(Ok(c));
        self
    }

    pub fn push_str(mut self, s: &str) -> Self {
        self.script.extend(s.chars().map(Ok));
        self
    }

    /// Queue a read failure of the given kind.
    pub fn push_error(mut self, kind: io::ErrorKind) -> Self {
        self.script
            .push_back(Err(io::Error::new(kind, "scripted read failure")));
        self
    }

    /// Number of reads performed so far, including reads past the end.
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl CharSource for ScriptedSource {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        self.reads += 1;
        self.script.pop_front().transpose()
    }
}
