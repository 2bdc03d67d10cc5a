//! Built-in records shown when the dashboard runs without a backend.

use super::record::AttendanceRecord;

fn record(
    id: Option<i64>,
    employee: Option<&str>,
    date: &str,
    status: &str,
    check_in: &str,
    check_out: &str,
) -> AttendanceRecord {
    AttendanceRecord {
        id,
        employee: employee.map(str::to_string),
        date: date.to_string(),
        status: status.to_string(),
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
    }
}

/// Personal log, newest first
pub fn personal_log() -> Vec<AttendanceRecord> {
    vec![
        record(None, None, "2024-07-29", "Present", "09:01 AM", "05:58 PM"),
        record(None, None, "2024-07-28", "Present", "08:55 AM", "06:05 PM"),
        record(None, None, "2024-07-27", "Weekend", "-", "-"),
        record(None, None, "2024-07-26", "Weekend", "-", "-"),
        record(None, None, "2024-07-25", "Present", "09:05 AM", "06:00 PM"),
        record(None, None, "2024-07-24", "Late", "09:15 AM", "05:50 PM"),
        record(None, None, "2024-07-23", "Present", "08:59 AM", "06:02 PM"),
    ]
}

pub fn team_records() -> Vec<AttendanceRecord> {
    vec![
        record(Some(1), Some("Olivia Martin"), "2024-08-01", "Present", "09:01 AM", "05:58 PM"),
        record(Some(2), Some("Jackson Lee"), "2024-08-01", "Present", "08:55 AM", "06:05 PM"),
        record(Some(3), Some("William Kim"), "2024-08-01", "Late", "09:15 AM", "05:50 PM"),
        record(Some(4), Some("Sofia Davis"), "2024-08-01", "Present", "08:59 AM", "06:02 PM"),
    ]
}
