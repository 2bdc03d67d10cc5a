pub mod session;

pub use session::{format_hours, PunchSession, PunchState, ShiftSummary, TimesheetError};
