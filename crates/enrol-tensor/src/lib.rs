//! # enrol-tensor — Enrollment Tensor & Statistics Engine
//!
//! The Enrollment Tensor is a 3-dimensional view of a decade of
//! high-school enrollment records, indexed `[year][school][grade]` with
//! fixed axis lengths (10 × 20 × 3). The statistics engine computes
//! reductions over slices of that tensor.
//!
//! ## Mathematical Model
//!
//! The tensor T is a function:
//!
//! ```text
//! T : year_index × school_index × grade_index → Option<count>
//! ```
//!
//! where `None` marks an unreported cell. Every reduction (mean, median,
//! sum, min, max) excludes `None` cells rather than treating them as
//! zero or as errors — "ignore unreported data" semantics throughout.
//!
//! ## Numeric Contracts
//!
//! - Means are **floored after averaging** (never rounded, never
//!   truncated before the division).
//! - The over-enrollment filter is **strictly greater than** 500.
//! - Sums treat missing cells as contributing 0; a fully unreported
//!   year row sums to 0.
//!
//! These are independently testable contracts, not incidental rounding.

pub mod reduce;
pub mod stats;
pub mod tensor;

// Re-export primary types.
pub use reduce::{floored_mean, max_cell, mean_floor, median_trunc, min_cell, sum_cells};
pub use stats::{
    general_stats, school_stats, GeneralStats, OverThresholdMedian, SchoolStats,
    OVER_ENROLLMENT_THRESHOLD,
};
pub use tensor::{Enrollment, EnrollmentTensor, SchoolMatrix, YearTable};
