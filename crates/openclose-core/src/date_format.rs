use chrono::NaiveDate;

use crate::error::QuoteError;

/// The fixed date format used on the wire and in output: unpadded day, full
/// English month name, four-digit year (`5-January-2000`).
pub const DATE_FORMAT: &str = "%-d-%B-%Y";

/// Parse a date string in the fixed format.
pub fn parse_date(input: &str) -> Result<NaiveDate, QuoteError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| QuoteError::InvalidDate {
        input: input.to_string(),
    })
}

/// Format a date in the fixed format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Full English weekday name for a date (`Monday` through `Sunday`).
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
