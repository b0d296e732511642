//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the Enrollment Statistics Stack.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Shape errors are fatal to tensor construction and carry the expected
//!   vs actual dimensions plus the offending year index.
//! - Identifier errors are recoverable: the caller re-prompts. They carry
//!   a stable human-readable message and must never crash the process.
//! - The absence of a computed value (the over-threshold median with no
//!   qualifying cells) is NOT an error — it is an explicit result variant
//!   defined in `enrol-tensor`.

use thiserror::Error;

/// Top-level error type for the Enrollment Statistics Stack.
#[derive(Error, Debug)]
pub enum EnrolError {
    /// A yearly table deviates from the required schools × grades shape.
    /// Fatal to tensor construction.
    #[error(
        "year {year_index}: expected a {expected_rows}x{expected_cols} table, \
         got {actual_rows}x{actual_cols}"
    )]
    ShapeMismatch {
        /// Zero-based index of the offending yearly table.
        year_index: usize,
        /// Required row count (schools).
        expected_rows: usize,
        /// Required column count (grades).
        expected_cols: usize,
        /// Observed row count.
        actual_rows: usize,
        /// Observed column count of the first deviating row.
        actual_cols: usize,
    },

    /// The wrong number of yearly tables was supplied to the builder.
    /// Fatal to tensor construction.
    #[error("expected {expected} yearly tables, got {actual}")]
    YearCountMismatch {
        /// Required table count (one per year of the decade).
        expected: usize,
        /// Observed table count.
        actual: usize,
    },

    /// The supplied identifier does not resolve to any registry entry.
    /// Recoverable — the caller is expected to re-prompt.
    #[error("{0}")]
    InvalidIdentifier(String),

    /// A school index outside the registry's range was passed to the
    /// statistics engine.
    #[error("school index {index} out of range for {len} schools")]
    SchoolIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of schools on the tensor's school axis.
        len: usize,
    },

    /// IO error at the session boundary.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
