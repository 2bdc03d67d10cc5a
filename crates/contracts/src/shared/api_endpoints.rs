//! REST paths consumed by the dashboard views.

/// Team attendance records (admin view)
pub const ADMIN_ATTENDANCE: &str = "/admin/dashboard/attendance";

/// Attendance log of the signed-in employee.
///
/// Assumed path: the backend documents no employee attendance route, only
/// the admin `/admin/dashboard/attendance`.
pub const EMPLOYEE_ATTENDANCE: &str = "/employee/attendance";

/// Default backend port
pub const DEFAULT_API_PORT: u16 = 9000;
