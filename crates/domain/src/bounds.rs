// crates/domain/src/bounds.rs
use unique_collector_shared_kernel::{DomainError, DomainResult, EntryValue};

/// 受け付ける値の閉区間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Bounds {
    pub const DEFAULT: Self = Self { min: 1, max: 100 };

    pub fn new(min: i64, max: i64) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub const fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> i64 {
        self.max
    }

    #[inline]
    pub const fn contains(&self, value: EntryValue) -> bool {
        value.get() >= self.min && value.get() <= self.max
    }

    /// Number of distinct values the range admits, saturating at `u64::MAX`.
    pub const fn width(&self) -> u64 {
        (self.max.wrapping_sub(self.min) as u64).saturating_add(1)
    }

    pub fn check(&self, value: EntryValue) -> DomainResult<EntryValue> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(DomainError::OutOfRangeEntry {
                value: value.get(),
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
