// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bounds;
pub mod model;
pub mod parsing;

pub use bounds::Bounds;
pub use model::AcceptedSequence;
