use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month '{0}', expected YYYY-MM")]
pub struct InvalidYearMonth(String);

/// Calendar month (year + month), the unit the calendar views navigate by.
///
/// `month` is 1-based like chrono (`1` = January). Use [`YearMonth::from_zero_based`]
/// and [`YearMonth::month0`] when a 0-indexed month is needed.
///
/// Years are kept one year inside chrono's date range (see
/// [`YearMonth::supported_years`]), so the neighbouring months of any value,
/// and with them a full month grid, are always representable. Constructors
/// clamp to that range. On the wire a month is the string `"YYYY-MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Builds a month, carrying overflow of `month` into the year
    /// (`(2024, 13)` is January 2025, `(2025, 0)` is December 2024).
    pub fn new(year: i32, month: u32) -> Self {
        let month0 = i32::try_from(month).unwrap_or(i32::MAX) - 1;
        Self::from_zero_based(year, month0)
    }

    /// Builds a month from a 0-indexed month number with calendar carry rules.
    pub fn from_zero_based(year: i32, month0: i32) -> Self {
        let years = Self::supported_years();
        let year = year.saturating_add(month0.div_euclid(12));
        if year < *years.start() {
            return Self { year: *years.start(), month: 1 };
        }
        if year > *years.end() {
            return Self { year: *years.end(), month: 12 };
        }
        Self {
            year,
            month: month0.rem_euclid(12) as u32 + 1,
        }
    }

    /// Month of `date`. Dates in the first or last year of chrono's range
    /// map to the nearest supported month.
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Years a `YearMonth` may hold.
    pub fn supported_years() -> RangeInclusive<i32> {
        (NaiveDate::MIN.year() + 1)..=(NaiveDate::MAX.year() - 1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// 0-indexed month (0 = January .. 11 = December)
    pub fn month0(&self) -> u32 {
        self.month - 1
    }

    pub fn first_day(&self) -> NaiveDate {
        // in range by construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month: day 0 of the next month.
    pub fn last_day(&self) -> NaiveDate {
        let (year, month) = self.next_raw();
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or_else(|| self.first_day())
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Weekday of the 1st of the month, 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday_offset(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Previous month; the earliest supported month stays where it is.
    pub fn prev(&self) -> Self {
        Self::from_zero_based(self.year, self.month0() as i32 - 1)
    }

    /// Next month; the latest supported month stays where it is.
    pub fn next(&self) -> Self {
        Self::from_zero_based(self.year, self.month0() as i32 + 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    // Next month without clamping; always representable by the year margin.
    fn next_raw(&self) -> (i32, u32) {
        if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        }
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = InvalidYearMonth;

    /// Parses `YYYY-MM`; the year may be negative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidYearMonth(s.to_string());
        let (year, month) = s.rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self::new(year, month))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = InvalidYearMonth;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(YearMonth::new(2024, 2).days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 2).days_in_month(), 28);
        assert_eq!(YearMonth::new(1900, 2).days_in_month(), 28);
        assert_eq!(YearMonth::new(2000, 2).days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 4).days_in_month(), 30);
        assert_eq!(YearMonth::new(2025, 12).days_in_month(), 31);
    }

    #[test]
    fn test_year_boundaries() {
        let jan = YearMonth::new(2025, 1);
        assert_eq!(jan.prev(), YearMonth::new(2024, 12));
        assert_eq!(YearMonth::new(2024, 12).next(), jan);
        assert_eq!(YearMonth::from_zero_based(2025, -1), YearMonth::new(2024, 12));
        assert_eq!(YearMonth::from_zero_based(2024, 12), YearMonth::new(2025, 1));
        assert_eq!(YearMonth::new(2025, 0), YearMonth::new(2024, 12));
    }

    #[test]
    fn test_first_weekday_offset() {
        // 2025-06-01 is a Sunday, 2025-08-01 a Friday
        assert_eq!(YearMonth::new(2025, 6).first_weekday_offset(), 0);
        assert_eq!(YearMonth::new(2025, 8).first_weekday_offset(), 5);
    }

    #[test]
    fn test_range_edges_are_clamped() {
        let years = YearMonth::supported_years();
        let first = YearMonth::of(NaiveDate::MIN);
        let last = YearMonth::of(NaiveDate::MAX);
        assert_eq!((first.year(), first.month()), (*years.start(), 1));
        assert_eq!((last.year(), last.month()), (*years.end(), 12));

        assert_eq!(first.prev(), first);
        assert_eq!(last.next(), last);
        assert_eq!(first.days_in_month(), 31);
        assert_eq!(last.days_in_month(), 31);
        assert_eq!(YearMonth::new(i32::MAX, 13), last);
        assert_eq!(YearMonth::from_zero_based(i32::MIN, -1), first);
    }

    #[test]
    fn test_wire_format() {
        let month = YearMonth::new(2024, 7);
        assert_eq!(month.to_string(), "2024-07");
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2024-07\"");
        assert_eq!("2024-07".parse::<YearMonth>(), Ok(month));
        assert_eq!(serde_json::from_str::<YearMonth>("\"2025-12\"").unwrap(), YearMonth::new(2025, 12));
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("July 2024".parse::<YearMonth>().is_err());
        assert!(serde_json::from_str::<YearMonth>("\"2024\"").is_err());
    }

    #[test]
    fn test_contains() {
        let aug = YearMonth::new(2025, 8);
        assert!(aug.contains(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()));
        assert!(!aug.contains(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
        assert!(!aug.contains(NaiveDate::from_ymd_opt(2024, 8, 3).unwrap()));
    }
}
