//! Month calendar primitives shared by the admin and employee attendance views.

pub mod grid;
pub mod month;
pub mod navigation;

pub use grid::{build_month_grid, CalendarDay, MonthGrid, DAYS_PER_WEEK, GRID_CELLS};
pub use month::{InvalidYearMonth, YearMonth};
pub use navigation::CalendarNavigation;
