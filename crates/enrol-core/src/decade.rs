//! # Decade Constants
//!
//! The reporting window is fixed: ten school years, 2013 through 2022
//! inclusive, in chronological order. The year axis of the tensor is
//! defined by construction order alone; these constants exist so the
//! builder can validate the table count and so reports can label each
//! year index with its calendar year.

/// Length of the tensor's year axis.
pub const YEAR_COUNT: usize = 10;

/// Calendar year of year index 0.
pub const FIRST_YEAR: u16 = 2013;

/// Calendar year of year index `YEAR_COUNT - 1`.
pub const LAST_YEAR: u16 = 2022;

/// Calendar-year label for a year index on the tensor's year axis, or
/// `None` outside the decade.
///
/// The statistics engine never consults calendar labels — they exist
/// for reporting only.
pub fn year_label(year_index: usize) -> Option<u16> {
    if year_index < YEAR_COUNT {
        Some(FIRST_YEAR + year_index as u16)
    } else {
        None
    }
}
