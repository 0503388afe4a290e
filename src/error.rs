//! Error types for the assignment solver

use thiserror::Error;

/// Result type alias using the solver's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up or running a solve
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A solver was requested with zero rows or zero columns
    #[error("Invalid dimension {rows}x{cols}: rows and columns must be positive")]
    InvalidDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// The cost matrix does not have the shape the solver was built for
    #[error("Dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// Shape fixed at construction
        expected: (usize, usize),
        /// Shape of the supplied matrix
        got: (usize, usize),
    },

    /// A cost entry is NaN or infinite
    #[error("Non-finite cost at ({row}, {col})")]
    NonFiniteCost {
        /// Row of the first offending entry
        row: usize,
        /// Column of the first offending entry
        col: usize,
    },

    /// Entries are finite but so far apart that reducing them would overflow
    #[error("Cost spread too wide: reductions would overflow")]
    CostSpreadOverflow,

    /// An internal invariant broke while iterating; this is a solver bug, not bad input
    #[error("Algorithm fault: {0}")]
    AlgorithmFault(String),
}
