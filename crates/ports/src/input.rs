// crates/ports/src/input.rs
use unique_collector_shared_kernel::Result;

/// Source of whitespace-separated tokens read from line-oriented input.
pub trait TokenSource {
    /// Next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>>;

    /// Drops whatever remains of the line the last token came from.
    fn discard_line(&mut self);
}
