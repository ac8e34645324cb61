//! Word wrapping for help text.

use std::io::{self, Write};

use crate::core::TextFormatter;
use crate::types::DEFAULT_WRAP_WIDTH;

/// Wraps text at word boundaries to a fixed line width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapper {
    width: usize,
}

impl Default for Wrapper {
    fn default() -> Self {
        Self::new(DEFAULT_WRAP_WIDTH)
    }
}

impl Wrapper {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    /// Wrap at the width of the current terminal, or 80 columns if unknown.
    pub fn for_terminal() -> Self {
        match crossterm::terminal::size() {
            Ok((cols, _)) if cols > 0 => Self::new(cols as usize),
            _ => Self::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn write_wrapped(
        &self,
        out: &mut dyn Write,
        text: &str,
        first: &str,
        rest: &str,
    ) -> io::Result<()> {
        if text.is_empty() {
            return writeln!(out, "{}", first.trim_end());
        }

        let options = textwrap::Options::new(self.width)
            .initial_indent(first)
            .subsequent_indent(rest);
        for line in textwrap::wrap(text, options) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl TextFormatter for Wrapper {
    fn wrap(&self, out: &mut dyn Write, text: &str, indent: usize) -> io::Result<()> {
        let pad = " ".repeat(indent);
        self.write_wrapped(out, text, &pad, &pad)
    }

    fn wrap_prefixed(
        &self,
        out: &mut dyn Write,
        prefix: &str,
        text: &str,
        indent: usize,
    ) -> io::Result<()> {
        let first = format!("{}{}", " ".repeat(indent), prefix);
        let rest = " ".repeat(indent + prefix.chars().count());
        self.write_wrapped(out, text, &first, &rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn wrapped(width: usize, f: impl FnOnce(&Wrapper, &mut Vec<u8>)) -> String {
        let mut out = Vec::new();
        f(&Wrapper::new(width), &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let s = wrapped(80, |w, out| w.wrap(out, "Enter one of:", 2).unwrap());
        assert_eq!(s, "  Enter one of:\n");
    }

    #[test]
    fn long_text_breaks_at_words() {
        let s = wrapped(20, |w, out| {
            w.wrap(out, "alpha beta gamma delta epsilon", 0).unwrap()
        });
        assert_eq!(s, "alpha beta gamma\ndelta epsilon\n");
    }

    #[test]
    fn prefixed_continuation_aligns_after_prefix() {
        let s = wrapped(20, |w, out| {
            w.wrap_prefixed(out, "y  ", "one two three four five", 4)
                .unwrap()
        });
        assert_eq!(s, "    y  one two three\n       four five\n");
    }

    #[test]
    fn empty_text_still_prints_prefix() {
        let s = wrapped(80, |w, out| w.wrap_prefixed(out, "q  ", "", 4).unwrap());
        assert_eq!(s, "    q\n");
    }

    #[test]
    fn zero_width_is_clamped() {
        assert_eq!(Wrapper::new(0).width(), 1);
        assert_eq!(Wrapper::default().width(), DEFAULT_WRAP_WIDTH);
    }
}
