//! Text formatting service used for the help listing.

use std::io::{self, Write};

/// Writes paragraphs of text, indented and wrapped to some width.
///
/// Each call writes complete lines, including the trailing newline.
pub trait TextFormatter {
    /// Write `text` with every line indented by `indent` spaces.
    fn wrap(&self, out: &mut dyn Write, text: &str, indent: usize) -> io::Result<()>;

    /// Write `prefix` then `text`, indented by `indent` spaces.
    ///
    /// Continuation lines are aligned with the start of `text`.
    fn wrap_prefixed(
        &self,
        out: &mut dyn Write,
        prefix: &str,
        text: &str,
        indent: usize,
    ) -> io::Result<()>;
}

/// Formatter that never wraps. Handy where output is compared byte-for-byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWrap;

impl TextFormatter for NoWrap {
    fn wrap(&self, out: &mut dyn Write, text: &str, indent: usize) -> io::Result<()> {
        for line in text.split('\n') {
            writeln!(out, "{:indent$}{}", "", line, indent = indent)?;
        }
        Ok(())
    }

    fn wrap_prefixed(
        &self,
        out: &mut dyn Write,
        prefix: &str,
        text: &str,
        indent: usize,
    ) -> io::Result<()> {
        let hang = indent + prefix.chars().count();
        for (i, line) in text.split('\n').enumerate() {
            if i == 0 {
                writeln!(out, "{:indent$}{}{}", "", prefix, line, indent = indent)?;
            } else {
                writeln!(out, "{:hang$}{}", "", line, hang = hang)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_wrap_indents_each_line() {
        let mut out = Vec::new();
        NoWrap.wrap(&mut out, "one\ntwo", 2).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  one\n  two\n");
    }

    #[test]
    fn no_wrap_hangs_continuation_after_prefix() {
        let mut out = Vec::new();
        NoWrap.wrap_prefixed(&mut out, "y  ", "first\nsecond", 4).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "    y  first\n       second\n"
        );
    }
}
