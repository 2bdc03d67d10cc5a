use super::status::AttendanceStatus;
use crate::shared::calendar::YearMonth;
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One attendance entry as delivered by the backend.
///
/// Check-in/out are display strings ("09:01 AM", "-" when absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Employee name, present only in team listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    /// YYYY-MM-DD
    pub date: String,
    pub status: String,
    pub check_in: String,
    pub check_out: String,
}

impl AttendanceRecord {
    pub fn parsed_date(&self) -> anyhow::Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .with_context(|| format!("invalid attendance date '{}'", self.date))
    }

    pub fn status(&self) -> AttendanceStatus {
        AttendanceStatus::from_label(&self.status)
    }

    /// False for records whose date does not parse.
    pub fn is_in_month(&self, month: YearMonth) -> bool {
        self.parsed_date().is_ok_and(|date| month.contains(date))
    }
}

/// Records dated inside `month`, in input order.
pub fn records_in_month(records: &[AttendanceRecord], month: YearMonth) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|r| r.is_in_month(month))
        .cloned()
        .collect()
}

/// Status label per day, for marking calendar cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusIndex {
    by_date: HashMap<NaiveDate, String>,
}

impl StatusIndex {
    /// First record per date wins; records with unparseable dates are skipped.
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let mut by_date = HashMap::new();
        for record in records {
            match record.parsed_date() {
                Ok(date) => {
                    by_date.entry(date).or_insert_with(|| record.status.clone());
                }
                Err(e) => log::debug!("skipping record in status index: {e:#}"),
            }
        }
        Self { by_date }
    }

    pub fn status_on(&self, date: NaiveDate) -> Option<&str> {
        self.by_date.get(&date).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, status: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: None,
            employee: None,
            date: date.to_string(),
            status: status.to_string(),
            check_in: "-".to_string(),
            check_out: "-".to_string(),
        }
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{"id":3,"employee":"William Kim","date":"2024-08-01","status":"Late","checkIn":"09:15 AM","checkOut":"05:50 PM"}"#;
        let rec: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.employee.as_deref(), Some("William Kim"));
        assert_eq!(rec.check_in, "09:15 AM");
        assert_eq!(rec.status(), AttendanceStatus::Late);

        let personal = r#"{"date":"2024-07-27","status":"Weekend","checkIn":"-","checkOut":"-"}"#;
        let rec: AttendanceRecord = serde_json::from_str(personal).unwrap();
        assert_eq!(rec.id, None);
        let out = serde_json::to_string(&rec).unwrap();
        assert!(!out.contains("employee"));
        assert!(out.contains("\"checkOut\":\"-\""));
    }

    #[test]
    fn test_parsed_date() {
        assert_eq!(
            record("2024-07-29", "Present").parsed_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 29).unwrap()
        );
        let err = record("29.07.2024", "Present").parsed_date().unwrap_err();
        assert!(err.to_string().contains("29.07.2024"));
    }

    #[test]
    fn test_records_in_month() {
        let records = [
            record("2024-07-31", "Present"),
            record("2024-08-01", "Late"),
            record("bad", "Absent"),
            record("2024-08-02", "Present"),
        ];
        let august = records_in_month(&records, YearMonth::new(2024, 8));
        let dates: Vec<&str> = august.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2024-08-01", "2024-08-02"]);
        assert!(records_in_month(&records, YearMonth::new(2024, 9)).is_empty());
    }

    #[test]
    fn test_status_index_first_wins() {
        let index = StatusIndex::from_records(&[
            record("2024-07-29", "Present"),
            record("2024-07-29", "Late"),
            record("not-a-date", "Absent"),
            record("2024-07-27", "Weekend"),
        ]);
        assert_eq!(index.len(), 2);
        let day = NaiveDate::from_ymd_opt(2024, 7, 29).unwrap();
        assert_eq!(index.status_on(day), Some("Present"));
        assert_eq!(index.status_on(NaiveDate::from_ymd_opt(2024, 7, 30).unwrap()), None);
    }
}
