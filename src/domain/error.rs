use thiserror::Error;

/// Recoverable failures raised by the domain types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid description: cannot be empty")]
    EmptyDescription,

    #[error("Tag name cannot be empty")]
    EmptyTagName,

    #[error("Quadrant should be in between 1 and 4, got {0}")]
    InvalidPriorityLevel(i32),

    #[error("Time should be within 0-23 hours and 0-59 minutes, got {hour}:{minute}")]
    InvalidTime { hour: i32, minute: i32 },

    #[error("Invalid progress: must be between 0 and 100, got {0}")]
    InvalidProgress(i32),

    #[error("Invalid estimated time to complete: must not be negative, got {0}")]
    NegativeEstimate(i64),

    #[error("No elements remain in the priority traversal")]
    IteratorExhausted,
}
