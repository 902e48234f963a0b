// crates/shared-kernel/src/value_objects/mod.rs
pub mod capacity;
pub mod entry;

pub use capacity::Capacity;
pub use entry::EntryValue;
