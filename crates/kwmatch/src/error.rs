//! Error types for the kwmatch library
//!
//! Kwmatch uses a unified error type that wraps errors from its sub-components.

use thiserror::Error;

/// Main error type for kwmatch operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// Error from automaton construction
    #[error(transparent)]
    Automaton(#[from] kwmatch_ac::ACError),
}

/// Result type alias for kwmatch operations
pub type Result<T> = std::result::Result<T, TrieError>;

// Re-export component error types for users who need them
pub use kwmatch_ac::ACError;
