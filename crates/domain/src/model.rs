// crates/domain/src/model.rs
pub mod accepted_sequence;

pub use accepted_sequence::AcceptedSequence;
