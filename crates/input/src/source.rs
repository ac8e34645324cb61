//! Single-character input sources.

use std::io::{self, IsTerminal, Read, Stdin};

use log::debug;

use crate::raw::RawModeGuard;
use crate::types::REPLACEMENT_CHAR;

/// Something that yields one character per call.
pub trait CharSource {
    /// Read exactly one character.
    ///
    /// Returns `Ok(None)` once the input has ended; no further characters
    /// will ever arrive after that.
    fn read_char(&mut self) -> io::Result<Option<char>>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

/// Reads UTF-8 characters from a byte stream, optionally in raw terminal mode.
///
/// When raw mode is on, each read switches the terminal into raw mode just
/// for the duration of that read. If raw mode cannot be entered the read
/// still goes ahead in the current (line-buffered) mode.
#[derive(Debug)]
pub struct TerminalSource<R> {
    reader: R,
    raw: bool,
    pending: Option<u8>,
}

impl TerminalSource<Stdin> {
    /// Standard input, using raw mode only when it is attached to a terminal.
    pub fn stdin() -> Self {
        let stdin = io::stdin();
        let raw = stdin.is_terminal();
        Self {
            reader: stdin,
            raw,
            pending: None,
        }
    }
}

impl<R: Read> TerminalSource<R> {
    /// Wrap any reader. Raw mode is off until [`Self::with_raw_mode`] turns it on.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw: false,
            pending: None,
        }
    }

    pub fn with_raw_mode(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn raw_mode(&self) -> bool {
        self.raw
    }

    /// Give back the reader. A byte held over from a malformed sequence is dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> CharSource for TerminalSource<R> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let _guard = if self.raw {
            match RawModeGuard::acquire() {
                Ok(guard) => Some(guard),
                Err(err) => {
                    debug!("raw mode unavailable, reading buffered input: {err}");
                    None
                }
            }
        } else {
            None
        };

        read_utf8_char(&mut self.reader, &mut self.pending)
    }
}

/// Decode one UTF-8 character from `reader`.
///
/// `pending` carries a byte read but not consumed by the previous call; it is
/// used before anything new is read. A malformed sequence decodes to U+FFFD
/// and consumes only the bytes that belong to it: a byte that cannot continue
/// the sequence is left in `pending` to start the next character.
///
/// End of input before the first byte gives `Ok(None)`; end of input inside a
/// sequence is an error.
pub fn read_utf8_char<R: Read + ?Sized>(
    reader: &mut R,
    pending: &mut Option<u8>,
) -> io::Result<Option<char>> {
    let mut buf = [0u8; 4];
    match pending.take() {
        Some(b) => buf[0] = b,
        None => {
            if !read_byte(reader, &mut buf[0])? {
                return Ok(None);
            }
        }
    }

    let len = match buf[0] {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => return Ok(Some(REPLACEMENT_CHAR)),
    };

    for i in 1..len {
        if !read_byte(reader, &mut buf[i])? {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended inside a UTF-8 sequence",
            ));
        }
        if !(0x80..=0xbf).contains(&buf[i]) {
            *pending = Some(buf[i]);
            return Ok(Some(REPLACEMENT_CHAR));
        }
    }

    Ok(Some(
        std::str::from_utf8(&buf[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(REPLACEMENT_CHAR),
    ))
}

fn read_byte<R: Read + ?Sized>(reader: &mut R, byte: &mut u8) -> io::Result<bool> {
    loop {
        match reader.read(std::slice::from_mut(byte)) {
            Ok(0) => return Ok(false),
            Ok(_) => return Ok(true),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}
