use super::record::AttendanceRecord;
use super::status::AttendanceStatus;
use crate::shared::calendar::{build_month_grid, YearMonth};
use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

/// Monthly summary card of the employee attendance page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: Option<YearMonth>,
    /// Monday..Friday days of the month
    pub working_days: u32,
    pub present: u32,
    pub late: u32,
    pub absent: u32,
    pub on_leave: u32,
    pub remote: u32,
}

impl MonthlySummary {
    /// Counts only records dated inside `month`.
    pub fn from_records(month: YearMonth, records: &[AttendanceRecord]) -> Self {
        let mut summary = Self {
            month: Some(month),
            working_days: working_days(month),
            ..Default::default()
        };

        for record in records {
            let Ok(date) = record.parsed_date() else {
                continue;
            };
            if !month.contains(date) {
                continue;
            }
            match record.status() {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Late => summary.late += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::OnLeave => summary.on_leave += 1,
                AttendanceStatus::Remote => summary.remote += 1,
                AttendanceStatus::Weekend | AttendanceStatus::Other(_) => {}
            }
        }

        summary
    }

    pub fn attended(&self) -> u32 {
        self.present + self.late + self.remote
    }

    /// Share of attended days that started on time, in percent.
    pub fn on_time_rate(&self) -> Option<f64> {
        let attended = self.attended();
        if attended == 0 {
            return None;
        }
        Some((self.present + self.remote) as f64 * 100.0 / attended as f64)
    }

    pub fn format_rate(&self) -> String {
        self.on_time_rate()
            .map(|rate| format!("{:.1}%", rate))
            .unwrap_or_else(|| "—".to_string())
    }
}

fn working_days(month: YearMonth) -> u32 {
    build_month_grid(month.first_day())
        .current_month_days()
        .filter(|d| !matches!(d.date.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_attendance::sample::personal_log;

    #[test]
    fn test_working_days() {
        assert_eq!(working_days(YearMonth::new(2024, 7)), 23);
        assert_eq!(working_days(YearMonth::new(2024, 2)), 21);
        assert_eq!(working_days(YearMonth::new(2025, 8)), 21);
    }

    #[test]
    fn test_summary_from_personal_log() {
        let summary = MonthlySummary::from_records(YearMonth::new(2024, 7), &personal_log());
        assert_eq!(summary.present, 4);
        assert_eq!(summary.late, 1);
        assert_eq!(summary.absent, 0);
        assert_eq!(summary.attended(), 5);
        assert_eq!(summary.format_rate(), "80.0%");
    }

    #[test]
    fn test_other_months_are_ignored() {
        let summary = MonthlySummary::from_records(YearMonth::new(2024, 8), &personal_log());
        assert_eq!(summary.attended(), 0);
        assert_eq!(summary.on_time_rate(), None);
        assert_eq!(summary.format_rate(), "—");
    }
}
