//! # School Registry — Static School-Axis Configuration
//!
//! The registry maps each school's numeric code to its display name and,
//! through its fixed iteration order, defines `school_index` — the
//! position every school occupies on the tensor's school axis. The
//! ordering here is the single authoritative link between a school's
//! identity and its slice of the tensor; the rows of every yearly input
//! table must follow it.
//!
//! ## Resolution Rule
//!
//! An identifier made entirely of ASCII digits is interpreted
//! exclusively as a code lookup; anything else is interpreted
//! exclusively as an exact, case-sensitive name lookup. A code that
//! happens to equal text is never matched against names, and vice versa.

use serde::{Deserialize, Serialize};

use crate::error::EnrolError;

/// Stable numeric code identifying a school across reporting years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchoolCode(pub u32);

impl std::fmt::Display for SchoolCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One registry entry: a school's code and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct School {
    /// Stable numeric code.
    pub code: SchoolCode,
    /// Exact display name used for name-based resolution.
    pub name: &'static str,
}

/// Length of the tensor's school axis.
pub const SCHOOL_COUNT: usize = 20;

/// The stable user-facing message carried by identifier failures.
const INVALID_IDENTIFIER_MSG: &str = "You must enter a valid school name or code.";

/// The twenty Calgary senior high schools of the reporting window, in
/// school-axis order. Row `i` of every yearly table is school `i` here.
const SCHOOLS: [School; SCHOOL_COUNT] = [
    School { code: SchoolCode(1224), name: "Centennial High School" },
    School { code: SchoolCode(1679), name: "Robert Thirsk School" },
    School { code: SchoolCode(9626), name: "Louise Dean School" },
    School { code: SchoolCode(9806), name: "Queen Elizabeth High School" },
    School { code: SchoolCode(9813), name: "Forest Lawn High School" },
    School { code: SchoolCode(9815), name: "Crescent Heights High School" },
    School { code: SchoolCode(9816), name: "Western Canada High School" },
    School { code: SchoolCode(9823), name: "Central Memorial High School" },
    School { code: SchoolCode(9825), name: "James Fowler High School" },
    School { code: SchoolCode(9826), name: "Ernest Manning High School" },
    School { code: SchoolCode(9829), name: "William Aberhart High School" },
    School { code: SchoolCode(9830), name: "National Sport School" },
    School { code: SchoolCode(9836), name: "Henry Wise Wood High School" },
    School { code: SchoolCode(9847), name: "Bowness High School" },
    School { code: SchoolCode(9850), name: "Lord Beaverbrook High School" },
    School { code: SchoolCode(9856), name: "Jack James High School" },
    School { code: SchoolCode(9857), name: "Sir Winston Churchill High School" },
    School { code: SchoolCode(9858), name: "Dr. E. P. Scarlett High School" },
    School { code: SchoolCode(9860), name: "John G Diefenbaker High School" },
    School { code: SchoolCode(9865), name: "Lester B. Pearson High School" },
];

/// Ordered mapping of school code → display name.
///
/// Static configuration, loaded once and never mutated. Purely a lookup
/// table — resolution has no side effects.
#[derive(Debug, Clone, Copy)]
pub struct SchoolRegistry {
    schools: &'static [School],
}

impl SchoolRegistry {
    /// The registry for the Calgary reporting window.
    pub fn calgary() -> Self {
        Self { schools: &SCHOOLS }
    }

    /// Number of registered schools.
    pub fn len(&self) -> usize {
        self.schools.len()
    }

    /// True when the registry has no entries. Never the case for the
    /// Calgary registry; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    /// The school at a given school-axis index.
    pub fn school_at(&self, index: usize) -> Result<&School, EnrolError> {
        self.schools
            .get(index)
            .ok_or(EnrolError::SchoolIndexOutOfRange {
                index,
                len: self.schools.len(),
            })
    }

    /// Iterate entries in school-axis order.
    pub fn iter(&self) -> impl Iterator<Item = &School> {
        self.schools.iter()
    }

    /// Resolve a free-form identifier to a school-axis index.
    ///
    /// An all-digit identifier is looked up as a code only; any other
    /// identifier is looked up as an exact name only. Case-sensitive,
    /// no fuzzy or partial matching.
    pub fn resolve(&self, identifier: &str) -> Result<usize, EnrolError> {
        let trimmed = identifier.trim();

        let position = if is_all_digits(trimmed) {
            // Codes within the registry always fit in u32; an overflowing
            // digit string simply matches nothing.
            trimmed
                .parse::<u32>()
                .ok()
                .and_then(|code| self.schools.iter().position(|s| s.code.0 == code))
        } else {
            self.schools.iter().position(|s| s.name == trimmed)
        };

        position.ok_or_else(|| EnrolError::InvalidIdentifier(INVALID_IDENTIFIER_MSG.to_string()))
    }
}

impl Default for SchoolRegistry {
    fn default() -> Self {
        Self::calgary()
    }
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
