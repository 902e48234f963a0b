// crates/domain/src/model/accepted_sequence.rs
use std::fmt;

use unique_collector_shared_kernel::{Capacity, DomainError, DomainResult, EntryValue};

use crate::bounds::Bounds;

/// 受理済みの値を挿入順に保持する固定容量のシーケンス
///
/// Storage for exactly `capacity` values is reserved up front and never grows.
/// Every stored value lies within the bounds it was accepted under and appears once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedSequence {
    capacity: Capacity,
    values: Vec<EntryValue>,
}

impl AcceptedSequence {
    pub fn with_capacity(capacity: Capacity) -> DomainResult<Self> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(capacity.get())
            .map_err(|_| DomainError::StorageUnavailable { capacity: capacity.get() })?;
        Ok(Self { capacity, values })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity.get()
    }

    /// 1-indexed position the next accepted value will occupy.
    #[inline]
    pub fn next_position(&self) -> usize {
        self.values.len() + 1
    }

    pub fn contains(&self, value: EntryValue) -> bool {
        self.values.iter().any(|v| *v == value)
    }

    /// Validates `value` and appends it. A rejection leaves the sequence untouched.
    pub fn accept(&mut self, value: EntryValue, bounds: &Bounds) -> DomainResult<()> {
        if self.is_full() {
            return Err(DomainError::CapacityReached { capacity: self.capacity.get() });
        }
        let value = bounds.check(value)?;
        if self.contains(value) {
            return Err(DomainError::DuplicateEntry { value: value.get() });
        }
        self.values.push(value);
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[EntryValue] {
        &self.values
    }

    pub fn into_values(self) -> Vec<EntryValue> {
        self.values
    }
}

/// Values separated by single spaces, no trailing separator.
impl fmt::Display for AcceptedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.values.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for value in iter {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}
