//! Memory Match (workspace facade crate).
//!
//! This package exposes `memory_match::{core,engine,input,term,types}` as one
//! public API while the implementation lives in dedicated crates under
//! `crates/`, and adds the JSON observation output used by the binary.

pub mod observe;

pub use memory_match_core as core;
pub use memory_match_engine as engine;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;
