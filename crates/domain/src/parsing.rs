// crates/domain/src/parsing.rs
//! Token parsing for the two kinds of input the session reads.
//!
//! A token is parsed as a whole; trailing garbage such as `12abc` is a failure.
//! Both kinds are 32-bit signed integers, so anything wider is a parse failure
//! and takes the discard-line retry path rather than a range or storage check.

use unique_collector_shared_kernel::{Capacity, DomainError, DomainResult, EntryValue};

/// Parses a capacity token. Anything that is not a strictly positive integer is rejected.
pub fn parse_capacity(token: &str) -> DomainResult<Capacity> {
    let invalid = || DomainError::InvalidCapacity { input: token.to_string() };

    let value: i32 = token.parse().map_err(|_| invalid())?;
    usize::try_from(value)
        .ok()
        .and_then(Capacity::new)
        .ok_or_else(invalid)
}

pub fn parse_entry(token: &str) -> DomainResult<EntryValue> {
    token
        .parse::<i32>()
        .map(|value| EntryValue::new(i64::from(value)))
        .map_err(|_| DomainError::NonNumericEntry { input: token.to_string() })
}
