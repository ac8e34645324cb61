//! Shared types and constants for single-keystroke prompts.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the registry, the renderer, the input layer and the response loop
//! alike.
//!
//! # Reserved characters
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `HELP_CHAR` | `?` | Shows the help listing instead of answering |
//! | `REPLACEMENT_CHAR` | `U+FFFD` | Stand-in for undecodable input |
//!
//! Any whitespace character (space, tab, return) selects the default
//! response when one is configured.
//!
//! # Layout constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LIST_INDENT` | 4 | Extra indent of help body lines and error messages |
//! | `CHAR_COLUMN_GAP` | `"  "` | Gap between a response character and its description |
//! | `DEFAULT_WRAP_WIDTH` | 80 | Wrap width when the terminal size is unknown |
//!
//! # Examples
//!
//! ```
//! use keyprompt_types::{Indents, HELP_CHAR, MIN_RESPONSES};
//!
//! let indents = Indents::new(2, 4);
//! assert_eq!(indents.first, 2);
//! assert_eq!(indents.rest, 4);
//!
//! assert_eq!(HELP_CHAR, '?');
//! assert_eq!(MIN_RESPONSES, 2);
//! ```

/// Response that requests the help listing.
pub const HELP_CHAR: char = '?';

/// Character reported when input could not be decoded.
pub const REPLACEMENT_CHAR: char = char::REPLACEMENT_CHARACTER;

/// Process exit status used by the "or die" entry points.
pub const ERR_EXIT_STATUS: i32 = 1;

/// Minimum number of distinct responses a prompt must offer.
pub const MIN_RESPONSES: usize = 2;

/// Extra indent applied to help body lines and reported errors.
pub const LIST_INDENT: usize = 4;

/// Separator between a response character and its description in the help listing.
pub const CHAR_COLUMN_GAP: &str = "  ";

/// Separator between responses in the compact listing.
pub const RESPONSE_SEPARATOR: char = '/';

/// Wrap width used when the terminal width cannot be queried.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Suffix appended to the default response's description in the help listing.
pub const DEFAULT_SUFFIX: &str = "(this is the default)";

/// Description of the help character in the help listing.
pub const HELP_DESCRIPTION: &str = "to show this message";

/// Closing line of the help listing.
pub const DEFAULT_HINT: &str = "to select the default either enter the character or whitespace \
     (a space, tab or return character)";

/// Indentation of the first prompt and of every prompt after it.
///
/// The first prompt may start part way along a line already written by the
/// caller; reprompts and help text always start on a fresh line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Indents {
    pub first: usize,
    pub rest: usize,
}

impl Indents {
    pub const fn new(first: usize, rest: usize) -> Self {
        Self { first, rest }
    }

    /// Indent for the given attempt, counting from zero.
    pub fn for_prompt(&self, index: u32) -> usize {
        if index == 0 {
            self.first
        } else {
            self.rest
        }
    }

    /// Indent used for help body lines and error messages.
    pub fn list(&self) -> usize {
        self.rest + LIST_INDENT
    }
}
