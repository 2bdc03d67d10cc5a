pub mod badge;
pub mod select;

pub use badge::{AttendanceStatusBadge, Badge};
pub use select::Select;
