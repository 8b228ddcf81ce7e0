//! Calendar widget abstraction.
//!
//! The dashboard talks to its month grid only through [`CalendarWidget`].
//! [`MonthGrid`] is the headless implementation the web front end renders;
//! any other control offering the same capabilities can replace it.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::{BTreeSet, HashSet};

use super::models::CurrentMonth;

pub type DayClickHandler = Box<dyn Fn(NaiveDate)>;
pub type MonthChangeHandler = Box<dyn Fn(CurrentMonth)>;

pub trait CalendarWidget {
    /// Show `month`
    fn render(&mut self, month: CurrentMonth);

    fn set_disabled_dates(&mut self, dates: BTreeSet<NaiveDate>);

    fn set_available_weekdays(&mut self, weekdays: HashSet<Weekday>);

    /// Called with the clicked date whenever the user clicks a day cell
    fn on_day_click(&mut self, handler: DayClickHandler);

    /// Called with the requested month whenever the user navigates
    fn on_month_change(&mut self, handler: MonthChangeHandler);
}

/// One cell of the six-week grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days of neighbouring months
    pub in_month: bool,
    pub disabled: bool,
    /// Falls on one of the available weekdays
    pub available: bool,
    pub selected: bool,
}

/// Headless month grid (Sunday-first, six weeks)
#[derive(Default)]
pub struct MonthGrid {
    month: Option<CurrentMonth>,
    selected: Option<NaiveDate>,
    disabled: BTreeSet<NaiveDate>,
    available_weekdays: HashSet<Weekday>,
    day_click: Option<DayClickHandler>,
    month_change: Option<MonthChangeHandler>,
}

pub const GRID_DAYS: usize = 42;

impl MonthGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(&self) -> Option<CurrentMonth> {
        self.month
    }

    /// Highlight `date` as the selected cell
    pub fn set_selected(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    /// Cells of the rendered month, empty until [`CalendarWidget::render`] is called
    pub fn cells(&self) -> Vec<GridCell> {
        let Some(month) = self.month else {
            return Vec::new();
        };

        let first = month.first_day();
        let padding = i64::from(first.weekday().num_days_from_sunday());
        let start = first - Duration::days(padding);

        (0..GRID_DAYS as i64)
            .map(|offset| start + Duration::days(offset))
            .map(|date| GridCell {
                date,
                in_month: month.contains(date),
                disabled: self.disabled.contains(&date),
                available: self.available_weekdays.contains(&date.weekday()),
                selected: self.selected == Some(date),
            })
            .collect()
    }

    /// Forward a click on `date` to the registered handler.
    ///
    /// The grid reports every click; whether it is acted upon is up to the
    /// handler.
    pub fn click(&self, date: NaiveDate) {
        if let Some(handler) = &self.day_click {
            handler(date);
        }
    }

    /// Ask to show the month after the rendered one
    pub fn request_next_month(&self) {
        if let Some(month) = self.month {
            self.request_month(month.next());
        }
    }

    /// Ask to show the month before the rendered one
    pub fn request_previous_month(&self) {
        if let Some(month) = self.month {
            self.request_month(month.previous());
        }
    }

    pub fn request_month(&self, month: CurrentMonth) {
        if let Some(handler) = &self.month_change {
            handler(month);
        }
    }
}

impl CalendarWidget for MonthGrid {
    fn render(&mut self, month: CurrentMonth) {
        self.month = Some(month);
    }

    fn set_disabled_dates(&mut self, dates: BTreeSet<NaiveDate>) {
        self.disabled = dates;
    }

    fn set_available_weekdays(&mut self, weekdays: HashSet<Weekday>) {
        self.available_weekdays = weekdays;
    }

    fn on_day_click(&mut self, handler: DayClickHandler) {
        self.day_click = Some(handler);
    }

    fn on_month_change(&mut self, handler: MonthChangeHandler) {
        self.month_change = Some(handler);
    }
}
