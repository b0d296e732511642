//! # Enrollment Tensor Construction
//!
//! Builds the immutable decade tensor from ten independently supplied
//! yearly tables and exposes the slicing accessors the statistics
//! engine works over.
//!
//! ## Shape Invariant
//!
//! Every yearly table must be exactly `SCHOOL_COUNT × GRADE_COUNT`, and
//! exactly `YEAR_COUNT` tables must be supplied, in chronological order.
//! Construction preserves each table's internal row and column order
//! unchanged — no reordering, no sorting. Violations are hard failures;
//! there is no partial or degraded tensor.

use enrol_core::{EnrolError, GRADE_COUNT, SCHOOL_COUNT, YEAR_COUNT};

/// One cell of the tensor: a reported enrollment count, or `None` when
/// the school did not report that grade for that year.
pub type Enrollment = Option<u32>;

/// One year's raw `schools × grades` table, rows in registry order,
/// columns in grade order.
///
/// A carrier for input data; shape is validated when the tensor is
/// built, so the offending year index can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTable {
    rows: Vec<Vec<Enrollment>>,
}

impl YearTable {
    /// Wrap one year of raw rows. Shape is checked at build time.
    pub fn new(rows: Vec<Vec<Enrollment>>) -> Self {
        Self { rows }
    }

    /// Row count (schools).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Validate this table's shape, reporting the given year index on
    /// failure.
    fn check_shape(&self, year_index: usize) -> Result<(), EnrolError> {
        let mismatch = |actual_rows, actual_cols| EnrolError::ShapeMismatch {
            year_index,
            expected_rows: SCHOOL_COUNT,
            expected_cols: GRADE_COUNT,
            actual_rows,
            actual_cols,
        };

        if self.rows.len() != SCHOOL_COUNT {
            let cols = self.rows.first().map_or(0, Vec::len);
            return Err(mismatch(self.rows.len(), cols));
        }
        for row in &self.rows {
            if row.len() != GRADE_COUNT {
                return Err(mismatch(self.rows.len(), row.len()));
            }
        }
        Ok(())
    }
}

/// The immutable `YEAR_COUNT × SCHOOL_COUNT × GRADE_COUNT` enrollment
/// tensor.
///
/// Built once at startup and never mutated; every query reads from the
/// same value. Cells are stored flat in year-major, then school-major
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentTensor {
    cells: Vec<Enrollment>,
}

impl EnrollmentTensor {
    /// Combine the decade's yearly tables into the validated tensor.
    ///
    /// Tables must arrive in chronological order; their order defines
    /// the year axis. Fails with [`EnrolError::YearCountMismatch`] when
    /// the table count is wrong and [`EnrolError::ShapeMismatch`] when
    /// any table deviates from `SCHOOL_COUNT × GRADE_COUNT`.
    pub fn build(tables: Vec<YearTable>) -> Result<Self, EnrolError> {
        if tables.len() != YEAR_COUNT {
            return Err(EnrolError::YearCountMismatch {
                expected: YEAR_COUNT,
                actual: tables.len(),
            });
        }

        let mut cells = Vec::with_capacity(YEAR_COUNT * SCHOOL_COUNT * GRADE_COUNT);
        for (year_index, table) in tables.into_iter().enumerate() {
            table.check_shape(year_index)?;
            for row in table.rows {
                cells.extend(row);
            }
        }

        tracing::debug!(
            years = YEAR_COUNT,
            schools = SCHOOL_COUNT,
            grades = GRADE_COUNT,
            "enrollment tensor built"
        );
        Ok(Self { cells })
    }

    /// Axis lengths as `(years, schools, grades)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (YEAR_COUNT, SCHOOL_COUNT, GRADE_COUNT)
    }

    /// Number of axes. Always 3; mirrors the shape report printed at
    /// session start.
    pub fn ndim(&self) -> usize {
        3
    }

    /// The cell at `[year_index][school_index][grade_index]`.
    ///
    /// Coordinates must lie within the fixed axis lengths; callers
    /// validate the school index before slicing and the year/grade axes
    /// are driven by compile-time constants.
    pub fn cell(&self, year_index: usize, school_index: usize, grade_index: usize) -> Enrollment {
        debug_assert!(year_index < YEAR_COUNT);
        debug_assert!(school_index < SCHOOL_COUNT);
        debug_assert!(grade_index < GRADE_COUNT);
        self.cells[(year_index * SCHOOL_COUNT + school_index) * GRADE_COUNT + grade_index]
    }

    /// Iterate every cell of the tensor.
    pub fn cells(&self) -> impl Iterator<Item = Enrollment> + '_ {
        self.cells.iter().copied()
    }

    /// Iterate every cell of one year's `schools × grades` slice.
    pub fn year_cells(&self, year_index: usize) -> impl Iterator<Item = Enrollment> + '_ {
        debug_assert!(year_index < YEAR_COUNT);
        let start = year_index * SCHOOL_COUNT * GRADE_COUNT;
        self.cells[start..start + SCHOOL_COUNT * GRADE_COUNT]
            .iter()
            .copied()
    }

    /// Slice one school out of the tensor: its `years × grades` matrix.
    pub fn school_slice(&self, school_index: usize) -> Result<SchoolMatrix, EnrolError> {
        if school_index >= SCHOOL_COUNT {
            return Err(EnrolError::SchoolIndexOutOfRange {
                index: school_index,
                len: SCHOOL_COUNT,
            });
        }
        let mut cells = Vec::with_capacity(YEAR_COUNT * GRADE_COUNT);
        for year_index in 0..YEAR_COUNT {
            for grade_index in 0..GRADE_COUNT {
                cells.push(self.cell(year_index, school_index, grade_index));
            }
        }
        Ok(SchoolMatrix { cells })
    }
}

/// One school's `YEAR_COUNT × GRADE_COUNT` matrix, year-major.
///
/// A read-only snapshot taken from the tensor; owns its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolMatrix {
    cells: Vec<Enrollment>,
}

impl SchoolMatrix {
    /// Iterate every cell of the matrix.
    pub fn cells(&self) -> impl Iterator<Item = Enrollment> + '_ {
        self.cells.iter().copied()
    }

    /// Iterate one grade column across all years.
    pub fn grade_column(&self, grade_index: usize) -> impl Iterator<Item = Enrollment> + '_ {
        debug_assert!(grade_index < GRADE_COUNT);
        (0..YEAR_COUNT).map(move |y| self.cells[y * GRADE_COUNT + grade_index])
    }

    /// Iterate one year's row across all grades.
    pub fn year_row(&self, year_index: usize) -> impl Iterator<Item = Enrollment> + '_ {
        debug_assert!(year_index < YEAR_COUNT);
        self.cells[year_index * GRADE_COUNT..(year_index + 1) * GRADE_COUNT]
            .iter()
            .copied()
    }
}
