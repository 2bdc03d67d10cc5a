pub mod filter;
pub mod record;
pub mod sample;
pub mod status;
pub mod summary;

pub use filter::{AttendanceQuery, StatusFilter};
pub use record::{records_in_month, AttendanceRecord, StatusIndex};
pub use status::{AttendanceStatus, StatusCategory, StatusPalette, StatusPresentation};
pub use summary::MonthlySummary;
