// crates/infra/src/console.rs
pub mod line_tokens;
pub mod writer;

use std::io::{self, StdinLock, Stdout};

pub use line_tokens::LineTokenReader;
pub use writer::WriterTranscript;

/// Token reader over the locked process stdin.
pub fn stdin_tokens() -> LineTokenReader<StdinLock<'static>> {
    LineTokenReader::new(io::stdin().lock())
}

pub fn stdout_transcript() -> WriterTranscript<Stdout> {
    WriterTranscript::new(io::stdout())
}
