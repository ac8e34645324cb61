//! Response collection: prompt, read one keystroke, validate, reprompt.
//!
//! [`Responder`] drives the loop against a [`CharSource`](keyprompt_input::CharSource)
//! and a pair of writers, so the same code serves a real terminal and
//! scripted tests. [`FixedResponse`] implements the same [`Respond`]
//! interface without any I/O, for testing callers.
//!
//! # Example
//!
//! ```
//! use keyprompt_core::PromptConfig;
//! use keyprompt_engine::{Respond, Responder};
//! use keyprompt_input::ScriptedSource;
//!
//! let config = PromptConfig::builder("Overwrite", [('y', "overwrite"), ('n', "keep")])
//!     .default_response('n')
//!     .max_retries(2)
//!     .build()
//!     .unwrap();
//!
//! let mut responder = Responder::with_io(config, ScriptedSource::new("Y"), Vec::<u8>::new(), Vec::<u8>::new());
//! assert_eq!(responder.get_response().unwrap(), 'y');
//! ```

pub mod fixed;
pub mod respond;
pub mod responder;
pub mod terminate;

pub use keyprompt_core as core;
pub use keyprompt_input as input;
pub use keyprompt_term as term;
pub use keyprompt_types as types;

pub use fixed::FixedResponse;
pub use respond::Respond;
pub use responder::{classify, Choice, Responder, Session};
pub use terminate::{PanicExit, ProcessExit, Terminate};
