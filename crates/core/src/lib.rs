//! Prompt registry and renderer - pure, deterministic, and testable
//!
//! This crate holds everything about a prompt that does not touch a terminal:
//!
//! - [`config`]: [`PromptConfig`], the validated set of single-character
//!   responses, plus its builder
//! - [`render`]: the compact prompt line and the expanded help listing
//! - [`format`]: the [`TextFormatter`] seam used to wrap help text
//! - [`error`]: [`ConfigError`] and [`ResponseError`]
//!
//! # Example
//!
//! ```
//! use keyprompt_core::PromptConfig;
//!
//! let config = PromptConfig::builder(
//!     "Delete File",
//!     [('y', "delete the file"), ('n', "leave the file alone")],
//! )
//! .default_response('y')
//! .build()
//! .unwrap();
//!
//! assert_eq!(config.prompt_line(), "Delete File? ([y]/n/?): ");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod render;

pub use keyprompt_types as types;

pub use config::{PromptConfig, PromptConfigBuilder};
pub use error::{ConfigError, ResponseError};
pub use format::{NoWrap, TextFormatter};
