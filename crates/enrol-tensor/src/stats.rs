//! # Statistics Engine
//!
//! The two query entry points computed over the enrollment tensor:
//! [`school_stats`] for one school's `years × grades` slice and
//! [`general_stats`] for the whole tensor. Both share the
//! missing-aware reduction kernels in [`crate::reduce`].
//!
//! Results are read-only snapshots produced fresh per call; they own no
//! shared state and are serde-serializable for the `--json` output path.

use serde::{Deserialize, Serialize};

use enrol_core::{EnrolError, Grade, GRADE_COUNT, SCHOOL_COUNT, YEAR_COUNT};

use crate::reduce::{floored_mean, max_cell, mean_floor, median_trunc, min_cell, sum_cells};
use crate::tensor::EnrollmentTensor;

/// Cells must strictly exceed this count to enter the conditional
/// median.
pub const OVER_ENROLLMENT_THRESHOLD: u32 = 500;

/// Median over the cells strictly greater than
/// [`OVER_ENROLLMENT_THRESHOLD`].
///
/// `NoQualifyingCells` is not an error: it distinguishes "no enrollment
/// ever exceeded the threshold" from a median of zero. Callers must
/// branch on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverThresholdMedian {
    /// Median of the qualifying cells, truncated to an integer.
    Median(i64),
    /// No cell exceeded the threshold.
    NoQualifyingCells,
}

/// One school's enrollment profile over the decade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolStats {
    /// Floored mean enrollment per grade column, `None` when a grade
    /// was never reported.
    pub mean_per_grade: [Option<i64>; GRADE_COUNT],
    /// Largest single reported cell across the school's matrix.
    pub highest_enrollment: Option<u32>,
    /// Smallest single reported cell across the school's matrix.
    pub lowest_enrollment: Option<u32>,
    /// Sum across grades for each year. A fully unreported year totals
    /// 0, indistinguishable from a genuine zero-enrollment year.
    pub total_per_year: [i64; YEAR_COUNT],
    /// Sum of all per-year totals.
    pub decade_total: i64,
    /// Floored mean of the per-year totals.
    pub mean_yearly_total: i64,
    /// Median of cells strictly over the threshold.
    pub over_500_median: OverThresholdMedian,
}

/// All-schools statistics over the full tensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralStats {
    /// Floored mean of every cell in the first year's slice.
    pub mean_first_year: Option<i64>,
    /// Floored mean of every cell in the last year's slice.
    pub mean_last_year: Option<i64>,
    /// Sum of the graduating grade's cells across all schools in the
    /// last year.
    pub total_graduates_last_year: i64,
    /// Largest reported cell anywhere in the tensor.
    pub highest_enrollment: Option<u32>,
    /// Smallest reported cell anywhere in the tensor.
    pub lowest_enrollment: Option<u32>,
}

/// Compute one school's statistics over its `years × grades` slice.
///
/// The school index is the only precondition; every reduction is total
/// over a well-formed tensor.
pub fn school_stats(
    tensor: &EnrollmentTensor,
    school_index: usize,
) -> Result<SchoolStats, EnrolError> {
    let matrix = tensor.school_slice(school_index)?;
    tracing::debug!(school_index, "computing school statistics");

    let mut mean_per_grade = [None; GRADE_COUNT];
    for grade in Grade::all_grades() {
        mean_per_grade[grade.column()] = mean_floor(matrix.grade_column(grade.column()));
    }

    let mut total_per_year = [0_i64; YEAR_COUNT];
    for (year_index, total) in total_per_year.iter_mut().enumerate() {
        *total = sum_cells(matrix.year_row(year_index));
    }
    let decade_total = total_per_year.iter().sum();
    // The decade always has YEAR_COUNT totals, so the mean exists.
    let mean_yearly_total = floored_mean(&total_per_year).unwrap_or(0);

    let over_threshold: Vec<u32> = matrix
        .cells()
        .flatten()
        .filter(|&v| v > OVER_ENROLLMENT_THRESHOLD)
        .collect();
    let over_500_median = match median_trunc(over_threshold) {
        Some(median) => OverThresholdMedian::Median(median),
        None => OverThresholdMedian::NoQualifyingCells,
    };

    Ok(SchoolStats {
        mean_per_grade,
        highest_enrollment: max_cell(matrix.cells()),
        lowest_enrollment: min_cell(matrix.cells()),
        total_per_year,
        decade_total,
        mean_yearly_total,
        over_500_median,
    })
}

/// Compute the all-schools statistics over the full tensor.
///
/// "First year" and "last year" are year indices 0 and `YEAR_COUNT − 1`
/// — construction order, never a calendar lookup.
pub fn general_stats(tensor: &EnrollmentTensor) -> GeneralStats {
    tracing::debug!("computing general statistics");
    let last_year = YEAR_COUNT - 1;

    let total_graduates_last_year = sum_cells(
        (0..SCHOOL_COUNT).map(|s| tensor.cell(last_year, s, Grade::Twelve.column())),
    );

    GeneralStats {
        mean_first_year: mean_floor(tensor.year_cells(0)),
        mean_last_year: mean_floor(tensor.year_cells(last_year)),
        total_graduates_last_year,
        highest_enrollment: max_cell(tensor.cells()),
        lowest_enrollment: min_cell(tensor.cells()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::YearTable;

    /// Build a tensor where one chosen school has the given `Y × G`
    /// matrix and every other school is a constant.
    fn tensor_with_school(
        school_index: usize,
        matrix: [[Option<u32>; GRADE_COUNT]; YEAR_COUNT],
    ) -> EnrollmentTensor {
        let tables: Vec<YearTable> = (0..YEAR_COUNT)
            .map(|y| {
                YearTable::new(
                    (0..SCHOOL_COUNT)
                        .map(|s| {
                            if s == school_index {
                                matrix[y].to_vec()
                            } else {
                                vec![Some(300); GRADE_COUNT]
                            }
                        })
                        .collect(),
                )
            })
            .collect();
        EnrollmentTensor::build(tables).unwrap()
    }

    fn uniform_matrix(value: u32) -> [[Option<u32>; GRADE_COUNT]; YEAR_COUNT] {
        [[Some(value); GRADE_COUNT]; YEAR_COUNT]
    }

    #[test]
    fn per_grade_means_are_floored_per_column() {
        let mut matrix = uniform_matrix(100);
        // Grade 10 column alternates 10 and 11 → true mean 10.5 → 10.
        for (y, row) in matrix.iter_mut().enumerate() {
            row[0] = Some(if y % 2 == 0 { 10 } else { 11 });
        }
        let tensor = tensor_with_school(4, matrix);
        let stats = school_stats(&tensor, 4).unwrap();
        assert_eq!(stats.mean_per_grade[0], Some(10));
        assert_eq!(stats.mean_per_grade[1], Some(100));
        assert_eq!(stats.mean_per_grade[2], Some(100));
    }

    #[test]
    fn missing_cells_do_not_move_the_grade_mean() {
        let mut with_gap = uniform_matrix(200);
        with_gap[3][1] = None;
        let gap_stats = school_stats(&tensor_with_school(0, with_gap), 0).unwrap();
        let dense_stats = school_stats(&tensor_with_school(0, uniform_matrix(200)), 0).unwrap();
        assert_eq!(gap_stats.mean_per_grade[1], dense_stats.mean_per_grade[1]);

        // Replacing the gap with a real number must change the mean.
        let mut with_zero = uniform_matrix(200);
        with_zero[3][1] = Some(0);
        let zero_stats = school_stats(&tensor_with_school(0, with_zero), 0).unwrap();
        assert_ne!(zero_stats.mean_per_grade[1], dense_stats.mean_per_grade[1]);
    }

    #[test]
    fn extrema_cover_the_whole_matrix() {
        let mut matrix = uniform_matrix(400);
        matrix[0][0] = Some(1350);
        matrix[9][2] = Some(45);
        let stats = school_stats(&tensor_with_school(7, matrix), 7).unwrap();
        assert_eq!(stats.highest_enrollment, Some(1350));
        assert_eq!(stats.lowest_enrollment, Some(45));
    }

    #[test]
    fn per_year_totals_match_row_sums_and_decade_total() {
        let mut matrix = uniform_matrix(0);
        for (y, row) in matrix.iter_mut().enumerate() {
            for (g, cell) in row.iter_mut().enumerate() {
                *cell = Some((100 * y + g) as u32);
            }
        }
        let stats = school_stats(&tensor_with_school(12, matrix), 12).unwrap();
        for (y, &total) in stats.total_per_year.iter().enumerate() {
            let expected = (0..GRADE_COUNT).map(|g| (100 * y + g) as i64).sum::<i64>();
            assert_eq!(total, expected, "year {y}");
        }
        assert_eq!(stats.decade_total, stats.total_per_year.iter().sum::<i64>());
    }

    #[test]
    fn fully_missing_year_totals_zero() {
        let mut matrix = uniform_matrix(250);
        matrix[6] = [None; GRADE_COUNT];
        let stats = school_stats(&tensor_with_school(2, matrix), 2).unwrap();
        assert_eq!(stats.total_per_year[6], 0);
        // The decade total still covers the other nine years.
        assert_eq!(stats.decade_total, 9 * 3 * 250);
    }

    #[test]
    fn mean_yearly_total_is_floored() {
        let mut matrix = uniform_matrix(0);
        // Totals per year: 10, 11, 10, 11, … → mean 10.5 → 10.
        for (y, row) in matrix.iter_mut().enumerate() {
            *row = [Some(if y % 2 == 0 { 10 } else { 11 }), Some(0), Some(0)];
        }
        let stats = school_stats(&tensor_with_school(9, matrix), 9).unwrap();
        assert_eq!(stats.mean_yearly_total, 10);
    }

    #[test]
    fn conditional_median_uses_strictly_greater_cells() {
        let mut matrix = uniform_matrix(100);
        // Exactly 500 must NOT qualify; {600, 700, 502} → median 600.
        matrix[0] = [Some(100), Some(600), Some(500)];
        matrix[1] = [Some(700), Some(502), Some(100)];
        let stats = school_stats(&tensor_with_school(15, matrix), 15).unwrap();
        assert_eq!(stats.over_500_median, OverThresholdMedian::Median(600));
    }

    #[test]
    fn conditional_median_reports_no_qualifying_cells() {
        // All cells ≤ 500, including the boundary value itself.
        let stats = school_stats(&tensor_with_school(3, uniform_matrix(500)), 3).unwrap();
        assert_eq!(stats.over_500_median, OverThresholdMedian::NoQualifyingCells);
    }

    #[test]
    fn school_index_precondition_is_checked() {
        let tensor = tensor_with_school(0, uniform_matrix(1));
        assert!(matches!(
            school_stats(&tensor, SCHOOL_COUNT).unwrap_err(),
            EnrolError::SchoolIndexOutOfRange { .. }
        ));
    }

    #[test]
    fn general_stats_first_and_last_year_by_construction_order() {
        // All cells = year_index + 1: first-year mean 1, last-year mean 10.
        let tables: Vec<YearTable> = (0..YEAR_COUNT)
            .map(|y| {
                YearTable::new(vec![
                    vec![Some(y as u32 + 1); GRADE_COUNT];
                    SCHOOL_COUNT
                ])
            })
            .collect();
        let tensor = EnrollmentTensor::build(tables).unwrap();
        let stats = general_stats(&tensor);
        assert_eq!(stats.mean_first_year, Some(1));
        assert_eq!(stats.mean_last_year, Some(10));
        assert_eq!(stats.highest_enrollment, Some(10));
        assert_eq!(stats.lowest_enrollment, Some(1));
    }

    #[test]
    fn graduating_total_sums_last_grade_of_last_year() {
        // Grade-12 column of the last year = school_index → 0+1+…+19 = 190.
        let tables: Vec<YearTable> = (0..YEAR_COUNT)
            .map(|y| {
                YearTable::new(
                    (0..SCHOOL_COUNT)
                        .map(|s| {
                            if y == YEAR_COUNT - 1 {
                                vec![Some(1), Some(1), Some(s as u32)]
                            } else {
                                vec![Some(1); GRADE_COUNT]
                            }
                        })
                        .collect(),
                )
            })
            .collect();
        let tensor = EnrollmentTensor::build(tables).unwrap();
        assert_eq!(general_stats(&tensor).total_graduates_last_year, 190);
    }

    #[test]
    fn graduating_total_skips_missing_reports() {
        let tables: Vec<YearTable> = (0..YEAR_COUNT)
            .map(|y| {
                YearTable::new(
                    (0..SCHOOL_COUNT)
                        .map(|s| {
                            if y == YEAR_COUNT - 1 && s == 0 {
                                vec![Some(1), Some(1), None]
                            } else {
                                vec![Some(1); GRADE_COUNT]
                            }
                        })
                        .collect(),
                )
            })
            .collect();
        let tensor = EnrollmentTensor::build(tables).unwrap();
        // 19 reporting schools contribute 1 each; the gap contributes 0.
        assert_eq!(general_stats(&tensor).total_graduates_last_year, 19);
    }

    #[test]
    fn results_serialize_for_the_json_path() {
        let tensor = tensor_with_school(1, uniform_matrix(600));
        let school = school_stats(&tensor, 1).unwrap();
        let general = general_stats(&tensor);

        let json = serde_json::to_string(&school).unwrap();
        let back: SchoolStats = serde_json::from_str(&json).unwrap();
        assert_eq!(school, back);

        let json = serde_json::to_string(&general).unwrap();
        let back: GeneralStats = serde_json::from_str(&json).unwrap();
        assert_eq!(general, back);
    }
}
