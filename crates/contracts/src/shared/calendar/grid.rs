use super::month::YearMonth;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Cells in a 6×7 month grid.
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

/// 42 calendar cells in row-major order, each row a Sunday..Saturday week.
///
/// The current-month cells cover every day of the month exactly once,
/// in ascending order; the rest are trailing days of the previous month
/// and leading days of the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<CalendarDay>,
}

impl MonthGrid {
    pub fn for_month(month: YearMonth) -> Self {
        let start = month
            .first_day()
            .checked_sub_days(Days::new(month.first_weekday_offset() as u64));
        let cells = start
            .map(|start| {
                start
                    .iter_days()
                    .take(GRID_CELLS)
                    .map(|date| CalendarDay {
                        date,
                        is_current_month: month.contains(date),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { month, cells }
    }

    /// Month the grid was built for.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn cells(&self) -> &[CalendarDay] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDay> {
        self.cells.iter()
    }

    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.cells.iter().filter(|d| d.is_current_month)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a CalendarDay;
    type IntoIter = std::slice::Iter<'a, CalendarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Builds the 6×7 grid for the month containing `reference`.
/// The day-of-month of `reference` is ignored. Dates in the first or last
/// year of chrono's range get the grid of the nearest supported month.
pub fn build_month_grid(reference: NaiveDate) -> MonthGrid {
    MonthGrid::for_month(YearMonth::of(reference))
}
