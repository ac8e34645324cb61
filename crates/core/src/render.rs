//! Prompt renderer.
//!
//! Produces the compact prompt line, e.g. `Delete File? ([y]/n/?): `, and
//! the expanded help listing. Output is written exactly as shown; callers
//! rely on the format byte-for-byte.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::config::PromptConfig;
use crate::format::TextFormatter;
use crate::types::{
    CHAR_COLUMN_GAP, DEFAULT_HINT, DEFAULT_SUFFIX, HELP_CHAR, HELP_DESCRIPTION, LIST_INDENT,
    RESPONSE_SEPARATOR,
};

impl PromptConfig {
    /// The bracketed list of valid responses: default first as `[d]`, the rest
    /// in ascending order, then the help character.
    pub fn valid_responses(&self) -> String {
        let mut s = String::from("(");
        if let Some(d) = self.default_response() {
            let _ = write!(s, "[{d}]{RESPONSE_SEPARATOR}");
        }
        for (c, _) in self.non_default_responses() {
            s.push(c);
            s.push(RESPONSE_SEPARATOR);
        }
        s.push(HELP_CHAR);
        s.push_str("): ");
        s
    }

    /// The full prompt line: prompt text, `"? "`, then [`Self::valid_responses`].
    pub fn prompt_line(&self) -> String {
        format!("{}? {}", self.prompt(), self.valid_responses())
    }

    pub fn write_valid_responses(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.valid_responses().as_bytes())
    }

    pub fn write_prompt(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.prompt_line().as_bytes())
    }

    /// Write the help listing with its heading at `indent`.
    pub fn write_help(
        &self,
        out: &mut dyn Write,
        formatter: &dyn TextFormatter,
        indent: usize,
    ) -> io::Result<()> {
        let body = indent + LIST_INDENT;

        writeln!(out)?;
        formatter.wrap(out, "Enter one of:", indent)?;

        if let Some(d) = self.default_response() {
            let desc = self.description(d).unwrap_or_default();
            let text = if desc.is_empty() {
                DEFAULT_SUFFIX.to_string()
            } else {
                format!("{desc} {DEFAULT_SUFFIX}")
            };
            formatter.wrap_prefixed(out, &column(d), &text, body)?;
        }

        for (c, desc) in self.non_default_responses() {
            formatter.wrap_prefixed(out, &column(c), desc, body)?;
        }

        formatter.wrap_prefixed(out, &column(HELP_CHAR), HELP_DESCRIPTION, body)?;
        writeln!(out)?;
        formatter.wrap(out, DEFAULT_HINT, indent)
    }
}

fn column(c: char) -> String {
    format!("{c}{CHAR_COLUMN_GAP}")
}
