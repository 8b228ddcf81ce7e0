use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

use crate::error::{DashboardError, Result};

/// The month shown by the calendar.
///
/// Months are 0-indexed internally (0 = January). The booking API expects
/// 1-indexed months, so every wire query goes through [`CurrentMonth::wire_month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrentMonth {
    /// Always the first day of the month
    first: NaiveDate,
}

impl CurrentMonth {
    /// Create a month from a year and a 0-indexed month
    pub fn new(year: i32, month0: u32) -> Result<Self> {
        if month0 > 11 {
            return Err(DashboardError::InvalidMonth(month0));
        }
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .map(|first| Self { first })
            .ok_or(DashboardError::InvalidDate { year, month: month0 + 1, day: 1 })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self { first: date.with_day(1).unwrap_or(date) }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 0-indexed month (0 = January)
    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    /// 1-indexed month as sent to the API
    pub fn wire_month(&self) -> u32 {
        self.month0() + 1
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Number of days in this month (accounting for leap years)
    pub fn days_in_month(&self) -> u32 {
        match self.wire_month() {
            2 => {
                if is_leap_year(self.year()) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Materialize `day` against this month, `None` if the day does not exist
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        self.first.with_day(day)
    }

    /// Every date of the month, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=self.days_in_month()).filter_map(move |day| self.date(day))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month0()
    }

    /// Next month, rolling the year over after December
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Previous month, rolling the year back before January
    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }
}

impl fmt::Display for CurrentMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.wire_month())
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_wire_month_is_one_indexed() {
        let january = CurrentMonth::new(2024, 0).unwrap();
        assert_eq!(january.month0(), 0);
        assert_eq!(january.wire_month(), 1);

        let december = CurrentMonth::new(2024, 11).unwrap();
        assert_eq!(december.wire_month(), 12);
    }

    #[test]
    fn test_rejects_out_of_range_month() {
        assert_eq!(CurrentMonth::new(2024, 12), Err(DashboardError::InvalidMonth(12)));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(CurrentMonth::new(2025, 0).unwrap().days_in_month(), 31); // January
        assert_eq!(CurrentMonth::new(2025, 3).unwrap().days_in_month(), 30); // April
        assert_eq!(CurrentMonth::new(2025, 1).unwrap().days_in_month(), 28); // February (non-leap)
        assert_eq!(CurrentMonth::new(2024, 1).unwrap().days_in_month(), 29); // February (leap year)
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_navigation() {
        let june = CurrentMonth::new(2025, 5).unwrap();
        assert_eq!(june.previous(), CurrentMonth::new(2025, 4).unwrap());
        assert_eq!(june.next(), CurrentMonth::new(2025, 6).unwrap());

        let january = CurrentMonth::new(2025, 0).unwrap();
        assert_eq!(january.previous(), CurrentMonth::new(2024, 11).unwrap());

        let december = CurrentMonth::new(2025, 11).unwrap();
        assert_eq!(december.next(), CurrentMonth::new(2026, 0).unwrap());
    }

    #[test]
    fn test_date_materialization() {
        let february = CurrentMonth::new(2023, 1).unwrap();
        assert_eq!(february.date(28), Some(date(2023, 2, 28)));
        assert_eq!(february.date(29), None);
        assert_eq!(february.date(0), None);
        assert_eq!(february.days().count(), 28);
    }

    #[test]
    fn test_from_date_and_contains() {
        let month = CurrentMonth::from_date(date(2024, 1, 17));
        assert_eq!(month.first_day(), date(2024, 1, 1));
        assert!(month.contains(date(2024, 1, 31)));
        assert!(!month.contains(date(2024, 2, 1)));
        assert!(!month.contains(date(2023, 1, 17)));
        assert_eq!(month.to_string(), "2024-01");
    }
}
