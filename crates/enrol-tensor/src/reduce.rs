//! # Missing-Aware Reduction Kernels
//!
//! The reduction functions shared by both statistics entry points.
//! Every kernel excludes `None` cells from the computation — an
//! unreported value is never treated as zero and never raises an error.
//!
//! ## Numeric Contracts
//!
//! - [`mean_floor`] averages in `f64` and then applies `floor()`. For a
//!   column whose true average is 10.5 the result is 10, never 11.
//! - [`median_trunc`] averages the two middle values for even counts and
//!   truncates the result to an integer. Enrollment counts are
//!   non-negative, so truncation and flooring coincide.
//! - [`sum_cells`] lets a missing cell contribute 0, so an all-missing
//!   input sums to 0 rather than producing a missing total.

use crate::tensor::Enrollment;

/// Mean of the present cells, floored to an integer after averaging.
///
/// Returns `None` when no cell is present.
pub fn mean_floor<I>(cells: I) -> Option<i64>
where
    I: IntoIterator<Item = Enrollment>,
{
    let mut sum = 0.0_f64;
    let mut count = 0_u32;
    for cell in cells {
        if let Some(value) = cell {
            sum += f64::from(value);
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some((sum / f64::from(count)).floor() as i64)
    }
}

/// Floored mean of a slice of already-computed integer totals.
///
/// Totals are always present (a missing cell contributes 0 to its
/// total), so the only empty case is an empty slice.
pub fn floored_mean(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    Some((sum / values.len() as f64).floor() as i64)
}

/// Largest present cell, or `None` when every cell is missing.
pub fn max_cell<I>(cells: I) -> Option<u32>
where
    I: IntoIterator<Item = Enrollment>,
{
    cells.into_iter().flatten().max()
}

/// Smallest present cell, or `None` when every cell is missing.
pub fn min_cell<I>(cells: I) -> Option<u32>
where
    I: IntoIterator<Item = Enrollment>,
{
    cells.into_iter().flatten().min()
}

/// Sum of the present cells. Missing cells contribute 0; an empty or
/// all-missing input sums to 0.
pub fn sum_cells<I>(cells: I) -> i64
where
    I: IntoIterator<Item = Enrollment>,
{
    cells.into_iter().flatten().map(i64::from).sum()
}

/// Median of the given values, truncated to an integer.
///
/// Odd counts yield the middle element; even counts yield the mean of
/// the two middle elements, truncated. Returns `None` for an empty
/// input — the caller decides what an absent median means.
pub fn median_trunc(mut values: Vec<u32>) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let n = values.len();
    let median = if n % 2 == 1 {
        f64::from(values[n / 2])
    } else {
        (f64::from(values[n / 2 - 1]) + f64::from(values[n / 2])) / 2.0
    };
    Some(median.trunc() as i64)
}
