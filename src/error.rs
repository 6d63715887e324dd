//! Errors reported when building truth tables from external data.
//!
//! Precondition violations inside the engine (such as an out-of-range
//! variable index) are programming errors and panic instead.

use thiserror::Error;

/// Errors that can occur when constructing a truth table.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TruthTableError {
    /// The number of blocks does not match the arity.
    #[error("expected {expected} blocks for {num_vars} variables, got {actual}")]
    BlockCountMismatch {
        num_vars: usize,
        expected: usize,
        actual: usize,
    },

    /// Bits beyond position `2^num_vars` are set.
    #[error("bits outside the {num_vars}-variable table are set")]
    StrayBits { num_vars: usize },

    /// The integer does not fit into `2^num_vars` bits.
    #[error("value does not fit into a {num_vars}-variable table")]
    ValueOutOfRange { num_vars: usize },

    /// Arity exceeds what a dynamic table supports.
    #[error("{num_vars} variables requested, at most {max} supported")]
    TooManyVars { num_vars: usize, max: usize },
}
