pub mod admin;
pub mod user;

pub use admin::AdminAttendance;
pub use user::UserAttendance;
