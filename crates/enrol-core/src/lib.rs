//! # enrol-core — Foundational Types for the Enrollment Statistics Stack
//!
//! This crate is the bedrock of the Enrollment Statistics Stack. It defines
//! the type-system primitives that pin the tensor's axes down at compile
//! time. Every other crate in the workspace depends on `enrol-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `SchoolCode` is a newtype,
//!    not a bare integer, so a school code can never be confused with a
//!    school index or an enrollment count.
//!
//! 2. **Single `Grade` enum.** One definition, three variants, exhaustive
//!    `match` everywhere. The grade axis of the tensor is this enum's
//!    canonical order — there is no second column-order convention to
//!    drift out of sync.
//!
//! 3. **Static registry defines the school axis.** `SchoolRegistry`
//!    iteration order is the authoritative mapping between a school's
//!    identity and its position on the tensor's school axis. The registry
//!    is configuration, never derived data.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `enrol-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross the output boundary.

pub mod decade;
pub mod error;
pub mod grade;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use decade::{year_label, FIRST_YEAR, LAST_YEAR, YEAR_COUNT};
pub use error::EnrolError;
pub use grade::{Grade, GRADE_COUNT};
pub use registry::{School, SchoolCode, SchoolRegistry, SCHOOL_COUNT};
