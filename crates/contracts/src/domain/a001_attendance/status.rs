use serde::{Deserialize, Serialize};

/// Attendance state parsed from a status label.
///
/// Matching is exact and case-sensitive; anything else is kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    OnLeave,
    Remote,
    Weekend,
    Other(String),
}

impl AttendanceStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Present" => AttendanceStatus::Present,
            "Late" => AttendanceStatus::Late,
            "Absent" => AttendanceStatus::Absent,
            "On Leave" => AttendanceStatus::OnLeave,
            "Remote" => AttendanceStatus::Remote,
            "Weekend" => AttendanceStatus::Weekend,
            other => AttendanceStatus::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::OnLeave => "On Leave",
            AttendanceStatus::Remote => "Remote",
            AttendanceStatus::Weekend => "Weekend",
            AttendanceStatus::Other(label) => label,
        }
    }
}

/// Display category of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Success,
    Warning,
    Danger,
    Info,
    Accent,
    Neutral,
}

impl StatusCategory {
    pub fn name(&self) -> &'static str {
        match self {
            StatusCategory::Success => "success",
            StatusCategory::Warning => "warning",
            StatusCategory::Danger => "danger",
            StatusCategory::Info => "info",
            StatusCategory::Accent => "accent",
            StatusCategory::Neutral => "neutral",
        }
    }

    /// Variant name understood by the `Badge` component
    pub fn badge_variant(&self) -> &'static str {
        match self {
            StatusCategory::Success => "success",
            StatusCategory::Warning => "warning",
            StatusCategory::Danger => "error",
            StatusCategory::Info => "primary",
            StatusCategory::Accent => "accent",
            StatusCategory::Neutral => "neutral",
        }
    }
}

/// Category plus the label to show, which is always the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPresentation {
    pub category: StatusCategory,
    pub label: String,
}

/// Label → category table owned by one view.
///
/// The admin and employee views keep separate tables on purpose:
/// "Late" is a warning for admins and a danger badge for employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPalette {
    entries: &'static [(&'static str, StatusCategory)],
}

impl StatusPalette {
    pub const ADMIN: StatusPalette = StatusPalette::new(&[
        ("Present", StatusCategory::Success),
        ("Late", StatusCategory::Warning),
        ("Absent", StatusCategory::Danger),
        ("On Leave", StatusCategory::Info),
        ("Remote", StatusCategory::Accent),
    ]);

    pub const EMPLOYEE: StatusPalette = StatusPalette::new(&[
        ("Present", StatusCategory::Success),
        ("Late", StatusCategory::Danger),
        ("Weekend", StatusCategory::Neutral),
    ]);

    pub const fn new(entries: &'static [(&'static str, StatusCategory)]) -> Self {
        Self { entries }
    }

    pub fn category_of(&self, label: &str) -> Option<StatusCategory> {
        self.entries
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, category)| *category)
    }

    /// Never fails: unknown labels come back as `Neutral` with the label untouched.
    pub fn classify(&self, label: &str) -> StatusPresentation {
        StatusPresentation {
            category: self.category_of(label).unwrap_or(StatusCategory::Neutral),
            label: label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_is_success_everywhere() {
        for palette in [StatusPalette::ADMIN, StatusPalette::EMPLOYEE] {
            let p = palette.classify("Present");
            assert_eq!(p.category, StatusCategory::Success);
            assert_eq!(p.label, "Present");
        }
    }

    #[test]
    fn test_late_differs_per_view() {
        assert_eq!(StatusPalette::ADMIN.classify("Late").category, StatusCategory::Warning);
        assert_eq!(StatusPalette::EMPLOYEE.classify("Late").category, StatusCategory::Danger);
    }

    #[test]
    fn test_admin_only_labels() {
        assert_eq!(StatusPalette::ADMIN.classify("On Leave").category, StatusCategory::Info);
        assert_eq!(StatusPalette::ADMIN.classify("Remote").category, StatusCategory::Accent);
        assert_eq!(StatusPalette::ADMIN.classify("Absent").category, StatusCategory::Danger);
        assert_eq!(StatusPalette::EMPLOYEE.classify("Remote").category, StatusCategory::Neutral);
    }

    #[test]
    fn test_unknown_label_is_neutral_and_preserved() {
        for palette in [StatusPalette::ADMIN, StatusPalette::EMPLOYEE] {
            let p = palette.classify("Unknown-Label-XYZ");
            assert_eq!(p.category, StatusCategory::Neutral);
            assert_eq!(p.label, "Unknown-Label-XYZ");
        }
        assert_eq!(StatusPalette::ADMIN.classify("").label, "");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(StatusPalette::ADMIN.classify("present").category, StatusCategory::Neutral);
        assert_eq!(StatusPalette::ADMIN.classify("on leave").category, StatusCategory::Neutral);
        assert_eq!(
            AttendanceStatus::from_label("late"),
            AttendanceStatus::Other("late".to_string())
        );
    }

    #[test]
    fn test_status_labels_round_trip() {
        for label in ["Present", "Late", "Absent", "On Leave", "Remote", "Weekend", "Sick"] {
            assert_eq!(AttendanceStatus::from_label(label).label(), label);
        }
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(StatusCategory::Danger.badge_variant(), "error");
        assert_eq!(StatusCategory::Neutral.badge_variant(), "neutral");
        assert_eq!(
            serde_json::to_string(&StatusCategory::Warning).unwrap(),
            "\"warning\""
        );
    }
}
