use super::grid::{build_month_grid, MonthGrid};
use super::month::YearMonth;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Displayed month plus an optional selected day.
///
/// The two are independent: selecting a leading or trailing cell keeps
/// the displayed month where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarNavigation {
    pub current_month: YearMonth,
    pub selected_date: Option<NaiveDate>,
}

impl CalendarNavigation {
    pub fn new(current_month: YearMonth) -> Self {
        Self {
            current_month,
            selected_date: None,
        }
    }

    pub fn with_selection(current_month: YearMonth, selected_date: NaiveDate) -> Self {
        Self {
            current_month,
            selected_date: Some(selected_date),
        }
    }

    pub fn previous(&mut self) {
        self.current_month = self.current_month.prev();
    }

    pub fn next(&mut self) {
        self.current_month = self.current_month.next();
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    pub fn clear_selection(&mut self) {
        self.selected_date = None;
    }

    /// Clicking the selected day again clears the selection.
    pub fn toggle_selection(&mut self, date: NaiveDate) {
        if self.is_selected(date) {
            self.clear_selection();
        } else {
            self.select(date);
        }
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_month = YearMonth::of(today);
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected_date == Some(date)
    }

    pub fn grid(&self) -> MonthGrid {
        build_month_grid(self.current_month.first_day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_then_previous_is_identity() {
        let mut nav = CalendarNavigation::new(YearMonth::new(2025, 8));
        nav.next();
        assert_eq!(nav.current_month, YearMonth::new(2025, 9));
        nav.previous();
        assert_eq!(nav.current_month, YearMonth::new(2025, 8));
    }

    #[test]
    fn test_navigation_wraps_years() {
        let mut nav = CalendarNavigation::new(YearMonth::new(2025, 1));
        nav.previous();
        assert_eq!(nav.current_month, YearMonth::new(2024, 12));
        nav.next();
        nav.next();
        assert_eq!(nav.current_month, YearMonth::new(2025, 2));
    }

    #[test]
    fn test_selecting_outside_cell_keeps_month() {
        let mut nav = CalendarNavigation::new(YearMonth::new(2025, 8));
        let grid = nav.grid();
        let trailing = grid.cells()[0];
        assert!(!trailing.is_current_month);

        nav.select(trailing.date);
        assert_eq!(nav.current_month, YearMonth::new(2025, 8));
        assert!(nav.is_selected(trailing.date));
        assert_eq!(nav.selected_date, NaiveDate::from_ymd_opt(2025, 7, 27));
    }

    #[test]
    fn test_navigation_keeps_selection() {
        let day = NaiveDate::from_ymd_opt(2025, 8, 3).unwrap();
        let mut nav = CalendarNavigation::with_selection(YearMonth::new(2025, 8), day);
        nav.next();
        assert_eq!(nav.selected_date, Some(day));
        nav.clear_selection();
        assert!(!nav.is_selected(day));
    }

    #[test]
    fn test_toggle_selection() {
        let day = NaiveDate::from_ymd_opt(2025, 8, 3).unwrap();
        let other = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        let mut nav = CalendarNavigation::new(YearMonth::new(2025, 8));
        nav.toggle_selection(day);
        assert!(nav.is_selected(day));
        nav.toggle_selection(other);
        assert!(nav.is_selected(other));
        nav.toggle_selection(other);
        assert_eq!(nav.selected_date, None);
    }

    #[test]
    fn test_go_to_today() {
        let mut nav = CalendarNavigation::new(YearMonth::new(2020, 1));
        nav.go_to_today(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap());
        assert_eq!(nav.current_month, YearMonth::new(2025, 10));
        assert_eq!(nav.grid().month(), YearMonth::new(2025, 10));
    }
}
