pub mod d100_employee;

pub use d100_employee::ui::EmployeeDashboard;
