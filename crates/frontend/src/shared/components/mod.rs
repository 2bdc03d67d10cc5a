pub mod month_calendar;
pub mod stat_card;
pub mod ui;
