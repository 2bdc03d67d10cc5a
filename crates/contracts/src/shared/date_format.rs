/// Date and time formatting for the calendar and tracker views
use super::calendar::YearMonth;
use chrono::{NaiveDate, NaiveTime};

/// Column headers of the month grid, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Month title for calendar headers
/// Example: 2025-08 -> "August 2025"
pub fn month_title(month: YearMonth) -> String {
    month.first_day().format("%B %Y").to_string()
}

/// 12-hour clock time with two-digit hour
/// Example: 09:05 -> "09:05 AM", 17:58 -> "05:58 PM"
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Example: 2025-08-03 -> "2025-08-03"
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
