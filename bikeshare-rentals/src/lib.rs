pub mod daily;
pub mod date_range;
pub mod error;
pub mod hourly;

use error::{RentalError, Result};

/// Date format used for the `dteday` column: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Verify that every required column appears in a CSV header row.
pub(crate) fn check_columns(
    headers: &csv::StringRecord,
    required: &'static [&'static str],
) -> Result<()> {
    for &column in required {
        if !headers.iter().any(|header| header == column) {
            return Err(RentalError::MissingColumn(column));
        }
    }
    Ok(())
}
