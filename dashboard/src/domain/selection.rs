use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{BTreeSet, HashSet};

use super::models::CurrentMonth;

/// Result of a day click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Selection moved to the clicked day
    Accepted,
    /// The clicked day was already selected
    Unchanged,
    /// The day is not selectable; nothing happened
    Ignored,
}

/// The only user-owned state of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionState {
    selected_date: NaiveDate,
    current_month: CurrentMonth,
}

impl SelectionState {
    /// Start on `today`, showing today's month
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_date: today,
            current_month: CurrentMonth::from_date(today),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn current_month(&self) -> CurrentMonth {
        self.current_month
    }

    /// Move the selection to `day` if the calendar would allow clicking it.
    ///
    /// `day` must fall on one of `available_weekdays` and must not be in
    /// `disabled_days`; otherwise the click is silently ignored.
    pub fn set_selected_date(
        &mut self,
        day: NaiveDate,
        available_weekdays: &HashSet<Weekday>,
        disabled_days: &BTreeSet<NaiveDate>,
    ) -> SelectionOutcome {
        if !is_selectable(day, available_weekdays, disabled_days) {
            log::debug!("🖱️ SELECTION: Ignoring click on unavailable day {}", day);
            return SelectionOutcome::Ignored;
        }
        if day == self.selected_date {
            return SelectionOutcome::Unchanged;
        }

        self.selected_date = day;
        log::info!("🖱️ SELECTION: Selected {}", day);
        SelectionOutcome::Accepted
    }

    /// Change the visible month. Never moves the selected date.
    pub fn set_current_month(&mut self, month: CurrentMonth) {
        self.current_month = month;
        log::info!("📅 SELECTION: Showing {}", month);
    }
}

/// Whether the calendar lets the user pick `day`
pub fn is_selectable(
    day: NaiveDate,
    available_weekdays: &HashSet<Weekday>,
    disabled_days: &BTreeSet<NaiveDate>,
) -> bool {
    available_weekdays.contains(&day.weekday()) && !disabled_days.contains(&day)
}
