// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, CollectorError, DomainError, DomainResult, ErrorContext, InfrastructureError,
    Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Capacity, EntryValue};
