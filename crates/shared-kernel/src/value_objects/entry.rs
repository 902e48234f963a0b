// crates/shared-kernel/src/value_objects/entry.rs
use std::fmt;

/// A single integer the user submitted as a candidate entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EntryValue(i64);

impl EntryValue {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EntryValue {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for EntryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
