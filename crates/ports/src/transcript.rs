// crates/ports/src/transcript.rs
use unique_collector_shared_kernel::Result;

pub trait Transcript {
    /// Writes `text` without a line break and makes it visible before the next read.
    fn prompt(&mut self, text: &str) -> Result<()>;

    /// Writes `text` followed by a line break.
    fn line(&mut self, text: &str) -> Result<()>;
}
