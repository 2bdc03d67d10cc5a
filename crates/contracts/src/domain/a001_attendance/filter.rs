use super::record::AttendanceRecord;
use super::status::AttendanceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status buttons of the admin filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
    Present,
    Absent,
    Late,
    OnLeave,
    Remote,
}

impl StatusFilter {
    pub fn all() -> Vec<StatusFilter> {
        vec![
            StatusFilter::Present,
            StatusFilter::Absent,
            StatusFilter::Late,
            StatusFilter::OnLeave,
            StatusFilter::Remote,
        ]
    }

    /// Value used in element attributes
    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::Present => "present",
            StatusFilter::Absent => "absent",
            StatusFilter::Late => "late",
            StatusFilter::OnLeave => "leave",
            StatusFilter::Remote => "remote",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::Present => "Present",
            StatusFilter::Absent => "Absent",
            StatusFilter::Late => "Late",
            StatusFilter::OnLeave => "On Leave",
            StatusFilter::Remote => "Remote",
        }
    }

    pub fn matches(&self, status: &AttendanceStatus) -> bool {
        matches!(
            (self, status),
            (StatusFilter::Present, AttendanceStatus::Present)
                | (StatusFilter::Absent, AttendanceStatus::Absent)
                | (StatusFilter::Late, AttendanceStatus::Late)
                | (StatusFilter::OnLeave, AttendanceStatus::OnLeave)
                | (StatusFilter::Remote, AttendanceStatus::Remote)
        )
    }

    /// Clicking the active filter clears it; any other click selects it.
    pub fn toggle(current: Option<StatusFilter>, clicked: StatusFilter) -> Option<StatusFilter> {
        if current == Some(clicked) {
            None
        } else {
            Some(clicked)
        }
    }
}

/// Admin table filter: status, free-text search and an inclusive date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceQuery {
    pub status: Option<StatusFilter>,
    pub search: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl AttendanceQuery {
    pub fn has_date_range(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        if let Some(filter) = self.status {
            if !filter.matches(&record.status()) {
                return false;
            }
        }

        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let hit = record
                .employee
                .as_deref()
                .map(|e| e.to_lowercase().contains(&needle))
                .unwrap_or(false)
                || record.date.contains(&needle)
                || record.status.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if self.has_date_range() {
            let Ok(date) = record.parsed_date() else {
                return false;
            };
            if self.date_from.is_some_and(|from| date < from) {
                return false;
            }
            if self.date_to.is_some_and(|to| date > to) {
                return false;
            }
        }

        true
    }

    /// Limits the date range to a single day, keeping status and search.
    pub fn narrow_to_day(&mut self, date: NaiveDate) {
        self.date_from = Some(date);
        self.date_to = Some(date);
    }

    pub fn apply(&self, records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_attendance::sample::team_records;

    #[test]
    fn test_toggle() {
        assert_eq!(StatusFilter::toggle(None, StatusFilter::Late), Some(StatusFilter::Late));
        assert_eq!(StatusFilter::toggle(Some(StatusFilter::Late), StatusFilter::Late), None);
        assert_eq!(
            StatusFilter::toggle(Some(StatusFilter::Late), StatusFilter::Remote),
            Some(StatusFilter::Remote)
        );
    }

    #[test]
    fn test_values() {
        let values: Vec<&str> = StatusFilter::all().iter().map(|f| f.value()).collect();
        assert_eq!(values, ["present", "absent", "late", "leave", "remote"]);
    }

    #[test]
    fn test_status_filter() {
        let query = AttendanceQuery {
            status: Some(StatusFilter::Late),
            ..Default::default()
        };
        let rows = query.apply(&team_records());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee.as_deref(), Some("William Kim"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let query = AttendanceQuery {
            search: "  OLIVIA ".to_string(),
            ..Default::default()
        };
        let rows = query.apply(&team_records());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee.as_deref(), Some("Olivia Martin"));

        let none = AttendanceQuery {
            search: "nobody".to_string(),
            ..Default::default()
        };
        assert!(none.apply(&team_records()).is_empty());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let day = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let query = AttendanceQuery {
            date_from: Some(day),
            date_to: Some(day),
            ..Default::default()
        };
        assert_eq!(query.apply(&team_records()).len(), 4);

        let later = AttendanceQuery {
            date_from: day.succ_opt(),
            ..Default::default()
        };
        assert!(later.apply(&team_records()).is_empty());
    }

    #[test]
    fn test_narrow_to_day() {
        let mut query = AttendanceQuery {
            search: "olivia".to_string(),
            ..Default::default()
        };
        query.narrow_to_day(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
        let rows = query.apply(&team_records());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee.as_deref(), Some("Olivia Martin"));
        assert_eq!(query.search, "olivia");
    }

    #[test]
    fn test_unparseable_dates_only_dropped_with_range() {
        let mut rec = team_records().remove(0);
        rec.date = "soon".to_string();
        assert!(AttendanceQuery::default().matches(&rec));
        let ranged = AttendanceQuery {
            date_to: NaiveDate::from_ymd_opt(2030, 1, 1),
            ..Default::default()
        };
        assert!(!ranged.matches(&rec));
    }
}
