//! # Report Formatting
//!
//! Text rendering of the engine's result snapshots. The engine defines
//! the data and its labels; this module defines only the layout, and
//! returns strings so the layout is testable without a terminal.

use std::fmt::Write;

use enrol_core::{year_label, Grade, School, FIRST_YEAR, LAST_YEAR};
use enrol_tensor::{GeneralStats, OverThresholdMedian, SchoolStats};

/// Render one school's statistics block.
pub fn school_report(school: &School, stats: &SchoolStats) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "School Name: {}, School Code: {}",
        school.name, school.code
    );
    for grade in Grade::all_grades() {
        let _ = writeln!(
            out,
            "Mean enrollment for {}: {}",
            grade.label(),
            fmt_opt(stats.mean_per_grade[grade.column()])
        );
    }
    let _ = writeln!(
        out,
        "Highest enrollment for a single grade: {}",
        fmt_opt(stats.highest_enrollment)
    );
    let _ = writeln!(
        out,
        "Lowest enrollment for a single grade: {}",
        fmt_opt(stats.lowest_enrollment)
    );
    for (y, total) in stats.total_per_year.iter().enumerate() {
        if let Some(year) = year_label(y) {
            let _ = writeln!(out, "Total enrollment for {year}: {total}");
        }
    }
    let _ = writeln!(out, "Total ten year enrollment: {}", stats.decade_total);
    let _ = writeln!(
        out,
        "Mean total enrollment over 10 years: {}",
        stats.mean_yearly_total
    );
    match stats.over_500_median {
        OverThresholdMedian::Median(median) => {
            let _ = writeln!(
                out,
                "For all enrollments over 500, the median value was: {median}"
            );
        }
        OverThresholdMedian::NoQualifyingCells => {
            let _ = writeln!(out, "No enrollments over 500.");
        }
    }
    out
}

/// Render the all-schools statistics block.
pub fn general_report(stats: &GeneralStats) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Mean enrollment in {FIRST_YEAR}: {}",
        fmt_opt(stats.mean_first_year)
    );
    let _ = writeln!(
        out,
        "Mean enrollment in {LAST_YEAR}: {}",
        fmt_opt(stats.mean_last_year)
    );
    let _ = writeln!(
        out,
        "Total graduating class of {LAST_YEAR}: {}",
        stats.total_graduates_last_year
    );
    let _ = writeln!(
        out,
        "Highest enrollment for a single grade: {}",
        fmt_opt(stats.highest_enrollment)
    );
    let _ = writeln!(
        out,
        "Lowest enrollment for a single grade: {}",
        fmt_opt(stats.lowest_enrollment)
    );
    out
}

/// A reduction over zero present cells has no value to print.
fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "not reported".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enrol_core::{SchoolCode, GRADE_COUNT, YEAR_COUNT};

    fn sample_school_stats() -> SchoolStats {
        SchoolStats {
            mean_per_grade: [Some(560), Some(545), Some(530)],
            highest_enrollment: Some(612),
            lowest_enrollment: Some(498),
            total_per_year: [1635; YEAR_COUNT],
            decade_total: 16350,
            mean_yearly_total: 1635,
            over_500_median: OverThresholdMedian::Median(545),
        }
    }

    #[test]
    fn school_report_layout() {
        let school = School {
            code: SchoolCode(1224),
            name: "Centennial High School",
        };
        let text = school_report(&school, &sample_school_stats());
        assert!(text.starts_with("School Name: Centennial High School, School Code: 1224\n"));
        assert!(text.contains("Mean enrollment for Grade 10: 560"));
        assert!(text.contains("Mean enrollment for Grade 12: 530"));
        assert!(text.contains("Total enrollment for 2013: 1635"));
        assert!(text.contains("Total enrollment for 2022: 1635"));
        assert!(text.contains("Total ten year enrollment: 16350"));
        assert!(text.contains("For all enrollments over 500, the median value was: 545"));
    }

    #[test]
    fn school_report_no_qualifying_median_line() {
        let school = School {
            code: SchoolCode(9830),
            name: "National Sport School",
        };
        let mut stats = sample_school_stats();
        stats.over_500_median = OverThresholdMedian::NoQualifyingCells;
        let text = school_report(&school, &stats);
        assert!(text.contains("No enrollments over 500."));
        assert!(!text.contains("the median value was"));
    }

    #[test]
    fn unreported_reductions_render_as_not_reported() {
        let school = School {
            code: SchoolCode(9626),
            name: "Louise Dean School",
        };
        let mut stats = sample_school_stats();
        stats.mean_per_grade = [None; GRADE_COUNT];
        let text = school_report(&school, &stats);
        assert!(text.contains("Mean enrollment for Grade 10: not reported"));
    }

    #[test]
    fn general_report_layout() {
        let stats = GeneralStats {
            mean_first_year: Some(398),
            mean_last_year: Some(421),
            total_graduates_last_year: 8295,
            highest_enrollment: Some(759),
            lowest_enrollment: Some(43),
        };
        let text = general_report(&stats);
        assert!(text.contains("Mean enrollment in 2013: 398"));
        assert!(text.contains("Mean enrollment in 2022: 421"));
        assert!(text.contains("Total graduating class of 2022: 8295"));
        assert!(text.contains("Highest enrollment for a single grade: 759"));
        assert!(text.contains("Lowest enrollment for a single grade: 43"));
    }
}
