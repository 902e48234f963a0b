//! # Ports
//!
//! Interface definitions for the interactive console.
//!
//! - [`input`]: token-oriented reading with line resynchronization
//! - [`transcript`]: prompts and messages shown to the user
//!
//! The session use case only talks to these traits, so it can be driven by
//! scripted input in tests.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod input;
pub mod transcript;
