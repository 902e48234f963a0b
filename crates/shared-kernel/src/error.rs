// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CollectorError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, CollectorError>;

/// Domain-layer errors.
///
/// The rejection variants render as the exact text shown to the user, so the
/// session loop prints them through `Display` unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input! Enter a positive number: ")]
    InvalidCapacity { input: String },

    #[error("Invalid input! Enter a numeric value.")]
    NonNumericEntry { input: String },

    #[error("Out of range! Must be between {min} and {max}.")]
    OutOfRangeEntry { value: i64, min: i64, max: i64 },

    #[error("Duplicate detected! Try again.")]
    DuplicateEntry { value: i64 },

    #[error("Sequence is full: capacity {capacity} reached")]
    CapacityReached { capacity: usize },

    #[error("Invalid bounds: minimum {min} exceeds maximum {max}")]
    InvalidBounds { min: i64, max: i64 },

    #[error("Cannot reserve storage for {capacity} entries")]
    StorageUnavailable { capacity: usize },
}

impl DomainError {
    /// Rejections the session answers with a message and a retry.
    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidCapacity { .. }
                | Self::NonNumericEntry { .. }
                | Self::OutOfRangeEntry { .. }
                | Self::DuplicateEntry { .. }
        )
    }

    /// Whether the rejected token should also flush the rest of its input line.
    #[inline]
    pub const fn discards_line(&self) -> bool {
        matches!(self, Self::InvalidCapacity { .. } | Self::NonNumericEntry { .. })
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Input ended while waiting for {awaiting}")]
    InputExhausted { awaiting: String },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read input: {source}")]
    InputRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
    },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CollectorError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CollectorError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CollectorError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
