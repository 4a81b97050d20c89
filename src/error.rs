//! Errors for the helpers whose inputs can be malformed.
//!
//! Inventory misses and declined consumes are *not* errors; they come back as
//! `Option` / `bool`. Only misuse of the random helpers and invalid recipe
//! definitions end up here.

use thiserror::Error;

/// Errors raised by the mechanics and systems.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdleError {
    /// `random_number` needs `max >= 1`.
    #[error("random range is empty: max must be at least 1")]
    EmptyRange,

    /// Weighted choice over zero candidates.
    #[error("weighted choice needs at least one candidate")]
    NoCandidates,

    /// Candidates and weights must pair up one to one.
    #[error("weighted choice got {candidates} candidates but {weights} weights")]
    LengthMismatch {
        /// Number of candidates supplied.
        candidates: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// A weight was negative, NaN or infinite.
    #[error("weight at index {index} is not a finite non-negative number")]
    InvalidWeight {
        /// Position of the offending weight.
        index: usize,
    },

    /// All weights were zero.
    #[error("weights sum to zero")]
    ZeroTotalWeight,

    /// Every weight was finite but their sum overflowed to infinity.
    #[error("weights sum to a non-finite total")]
    WeightOverflow,

    /// A recipe or source definition failed validation.
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),
}

/// Result alias for fallible helpers.
pub type IdleResult<T> = Result<T, IdleError>;
