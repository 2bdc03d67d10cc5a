/// Utilities for reading the wall clock and date inputs
///
/// Formatting lives in `contracts::shared::date_format`; this module only
/// covers what depends on the browser or on `<input type="date">` values.
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Local wall-clock time
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    now_local().date()
}

/// Parse the value of a date input (yyyy-mm-dd); empty or invalid -> None
/// Example: "2024-08-01" -> Some(2024-08-01), "" -> None
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Value for a date input
pub fn format_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2024-08-01"),
            NaiveDate::from_ymd_opt(2024, 8, 1)
        );
        assert_eq!(parse_input_date(" "), None);
        assert_eq!(parse_input_date("01.08.2024"), None);
    }

    #[test]
    fn test_format_input_date() {
        assert_eq!(format_input_date(NaiveDate::from_ymd_opt(2024, 8, 1)), "2024-08-01");
        assert_eq!(format_input_date(None), "");
    }
}
