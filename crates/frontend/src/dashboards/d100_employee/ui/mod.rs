mod dashboard;

pub use dashboard::EmployeeDashboard;
