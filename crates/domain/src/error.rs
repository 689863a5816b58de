//! Common error types used across the workspace.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum AnidashError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("mean score {0} is outside 0..=10")]
    MeanScoreOutOfRange(f64),
    #[error("score {0} is outside 1..=10")]
    ScoreOutOfRange(u8),
    #[error("score {0} appears more than once in the distribution")]
    DuplicateScore(u8),
}
