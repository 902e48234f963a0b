// crates/usecase/src/dto.rs
use unique_collector_shared_kernel::{Capacity, EntryValue};

/// What a completed session collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub capacity: Capacity,
    pub values: Vec<EntryValue>,
    /// Entry tokens turned away during collection (capacity retries not included).
    pub rejected: usize,
}
