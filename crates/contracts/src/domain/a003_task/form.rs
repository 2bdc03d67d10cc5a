use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
    Urgent,
    Normal,
}

impl TaskPriority {
    pub fn all() -> Vec<TaskPriority> {
        vec![
            TaskPriority::High,
            TaskPriority::Medium,
            TaskPriority::Low,
            TaskPriority::Urgent,
            TaskPriority::Normal,
        ]
    }

    pub fn value(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
            TaskPriority::Urgent => "urgent",
            TaskPriority::Normal => "normal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::High => "High",
            TaskPriority::Medium => "Medium",
            TaskPriority::Low => "Low",
            TaskPriority::Urgent => "Urgent",
            TaskPriority::Normal => "Normal",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskLabel {
    Documentation,
    Feature,
    Bug,
    Enhancement,
    Design,
}

impl TaskLabel {
    pub fn all() -> Vec<TaskLabel> {
        vec![
            TaskLabel::Documentation,
            TaskLabel::Feature,
            TaskLabel::Bug,
            TaskLabel::Enhancement,
            TaskLabel::Design,
        ]
    }

    pub fn value(&self) -> &'static str {
        match self {
            TaskLabel::Documentation => "documentation",
            TaskLabel::Feature => "feature",
            TaskLabel::Bug => "bug",
            TaskLabel::Enhancement => "enhancement",
            TaskLabel::Design => "design",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskLabel::Documentation => "Documentation",
            TaskLabel::Feature => "Feature",
            TaskLabel::Bug => "Bug",
            TaskLabel::Enhancement => "Enhancement",
            TaskLabel::Design => "Design",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|l| l.value() == value)
    }
}

/// People a task can be assigned to, as `(value, display name)`
pub const ASSIGNEES: &[(&str, &str)] = &[
    ("jackson-lee", "Jackson Lee"),
    ("sarah-wilson", "Sarah Wilson"),
    ("mike-chen", "Mike Chen"),
    ("emma-davis", "Emma Davis"),
    ("john-smith", "John Smith"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    Title,
    Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskFormError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Please choose a priority.")]
    PriorityRequired,
}

impl TaskFormError {
    pub fn field(&self) -> TaskField {
        match self {
            TaskFormError::TitleRequired => TaskField::Title,
            TaskFormError::PriorityRequired => TaskField::Priority,
        }
    }

    /// Message shown under `field`, if any error targets it.
    pub fn message_for(errors: &[TaskFormError], field: TaskField) -> Option<String> {
        errors
            .iter()
            .find(|e| e.field() == field)
            .map(|e| e.to_string())
    }
}

/// Editable state of the create-task dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    /// Value from [`ASSIGNEES`]
    #[serde(rename = "assignees")]
    pub assignee: Option<String>,
    #[serde(rename = "labels")]
    pub label: Option<TaskLabel>,
    pub priority: Option<TaskPriority>,
}

/// A task that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "assignees", skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(rename = "labels", skip_serializing_if = "Option::is_none")]
    pub label: Option<TaskLabel>,
    pub priority: TaskPriority,
}

impl TaskForm {
    /// Reports every failing field at once, in form order.
    pub fn validate(&self) -> Result<NewTask, Vec<TaskFormError>> {
        let title = self.title.trim();
        let mut errors = Vec::new();
        if title.is_empty() {
            errors.push(TaskFormError::TitleRequired);
        }
        let Some(priority) = self.priority else {
            errors.push(TaskFormError::PriorityRequired);
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let description = self.description.trim();
        Ok(NewTask {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            assignee: self.assignee.clone().filter(|a| !a.is_empty()),
            label: self.label,
            priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reports_both_fields() {
        let errors = TaskForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![TaskFormError::TitleRequired, TaskFormError::PriorityRequired]
        );
        assert_eq!(
            TaskFormError::message_for(&errors, TaskField::Title).as_deref(),
            Some("Title is required.")
        );
        assert_eq!(
            TaskFormError::message_for(&errors, TaskField::Priority).as_deref(),
            Some("Please choose a priority.")
        );
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let form = TaskForm {
            title: "   ".to_string(),
            priority: Some(TaskPriority::High),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err(), vec![TaskFormError::TitleRequired]);
    }

    #[test]
    fn test_missing_priority_only() {
        let form = TaskForm {
            title: "Write report".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec![TaskFormError::PriorityRequired]);
        assert_eq!(TaskFormError::message_for(&errors, TaskField::Title), None);
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let form = TaskForm {
            title: " Fix login ".to_string(),
            description: "  ".to_string(),
            assignee: Some(String::new()),
            priority: Some(TaskPriority::Urgent),
            ..Default::default()
        };
        let task = form.validate().unwrap();
        assert_eq!(task.title, "Fix login");
        assert_eq!(task.description, None);
        assert_eq!(task.assignee, None);
        assert_eq!(task.label, None);
        assert_eq!(task.priority, TaskPriority::Urgent);
    }

    #[test]
    fn test_submitted_payload() {
        let form = TaskForm {
            title: "Release notes".to_string(),
            description: "Draft for v2".to_string(),
            assignee: Some("emma-davis".to_string()),
            label: Some(TaskLabel::Documentation),
            priority: Some(TaskPriority::Low),
        };
        let json = serde_json::to_string(&form.validate().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Release notes","description":"Draft for v2","assignees":"emma-davis","labels":"documentation","priority":"low"}"#
        );
    }

    #[test]
    fn test_select_values() {
        for p in TaskPriority::all() {
            assert_eq!(TaskPriority::from_value(p.value()), Some(p));
        }
        for l in TaskLabel::all() {
            assert_eq!(TaskLabel::from_value(l.value()), Some(l));
        }
        assert_eq!(TaskPriority::from_value(""), None);
        assert!(ASSIGNEES.iter().any(|(v, _)| *v == "mike-chen"));
    }
}
