//! Scoped raw mode for the controlling terminal.

use std::io;

use crossterm::terminal;
use log::trace;

/// Guard that enables raw mode and restores the previous mode on drop.
///
/// Dropping happens on every exit path, including early returns and
/// unwinding, so the terminal is never left in raw mode.
///
/// ```no_run
/// use keyprompt_input::RawModeGuard;
///
/// let _guard = RawModeGuard::acquire()?;
/// // single keystrokes are delivered immediately here
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct RawModeGuard {
    was_raw: bool,
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        let was_raw = terminal::is_raw_mode_enabled()?;
        if !was_raw {
            terminal::enable_raw_mode()?;
            trace!("raw mode enabled");
        }
        Ok(Self { was_raw })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if !self.was_raw {
            // Best-effort: nothing sensible can be done if this fails.
            let _ = terminal::disable_raw_mode();
            trace!("raw mode restored");
        }
    }
}
