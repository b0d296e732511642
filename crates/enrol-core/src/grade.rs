//! # Grade Taxonomy — Single Source of Truth
//!
//! Defines the `Grade` enum with the three senior high-school grades.
//! This is the ONE definition of the tensor's grade axis. Every `match`
//! on `Grade` must be exhaustive — adding a grade forces every consumer
//! to handle it at compile time, and the axis length constant is asserted
//! against the canonical ordering in tests.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EnrolError;

/// The three grades tracked on the tensor's grade axis, in column order.
///
/// The enrollment tensor's grade axis is indexed by
/// [`Grade::column()`]; the canonical ordering returned by
/// [`Grade::all_grades()`] matches the column order of every yearly
/// input table (grade 10, grade 11, grade 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Grade 10 — first senior high-school year.
    #[serde(rename = "grade_10")]
    Ten,
    /// Grade 11.
    #[serde(rename = "grade_11")]
    Eleven,
    /// Grade 12 — the graduating grade.
    #[serde(rename = "grade_12")]
    Twelve,
}

/// Length of the tensor's grade axis. Used for shape validation.
pub const GRADE_COUNT: usize = 3;

impl Grade {
    /// Returns all grades in canonical column order.
    pub fn all_grades() -> &'static [Grade] {
        &[Self::Ten, Self::Eleven, Self::Twelve]
    }

    /// The column this grade occupies in every yearly table, and the
    /// index it occupies on the tensor's grade axis.
    pub fn column(self) -> usize {
        match self {
            Self::Ten => 0,
            Self::Eleven => 1,
            Self::Twelve => 2,
        }
    }

    /// Returns the snake_case string identifier for this grade.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ten => "grade_10",
            Self::Eleven => "grade_11",
            Self::Twelve => "grade_12",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ten => "Grade 10",
            Self::Eleven => "Grade 11",
            Self::Twelve => "Grade 12",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = EnrolError;

    /// Parse a grade from its snake_case string identifier.
    ///
    /// Accepts the same identifiers produced by [`Grade::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grade_10" => Ok(Self::Ten),
            "grade_11" => Ok(Self::Eleven),
            "grade_12" => Ok(Self::Twelve),
            other => Err(EnrolError::InvalidIdentifier(format!(
                "unknown grade: {other:?}"
            ))),
        }
    }
}
