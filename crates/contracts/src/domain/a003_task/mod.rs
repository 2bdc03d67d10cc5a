pub mod form;

pub use form::{NewTask, TaskField, TaskForm, TaskFormError, TaskLabel, TaskPriority, ASSIGNEES};
