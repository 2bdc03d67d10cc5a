pub mod a001_attendance;
pub mod a002_timesheet;
pub mod a003_task;
