// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod console;

pub use console::{LineTokenReader, WriterTranscript, stdin_tokens, stdout_transcript};
