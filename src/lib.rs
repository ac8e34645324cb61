//! keyprompt (workspace facade crate).
//!
//! Re-exports the member crates under `keyprompt::{core,engine,input,term,types}`
//! so callers depend on one package while the implementation lives in
//! dedicated crates under `crates/`.

pub use keyprompt_core as core;
pub use keyprompt_engine as engine;
pub use keyprompt_input as input;
pub use keyprompt_term as term;
pub use keyprompt_types as types;

pub use keyprompt_core::{ConfigError, PromptConfig, ResponseError};
pub use keyprompt_engine::{FixedResponse, Respond, Responder};
