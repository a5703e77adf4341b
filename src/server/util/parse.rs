use chrono::NaiveDate;

use crate::server::error::AppError;

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Arguments
/// - `value` - The string to parse, surrounding whitespace is ignored
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::Validation)` - Not a valid `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "Invalid date '{}', expected format YYYY-MM-DD",
            value
        ))
    })
}
