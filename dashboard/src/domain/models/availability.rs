use chrono::NaiveDate;
use shared::MonthAvailabilityItem;

use super::month::CurrentMonth;

/// Availability flag for one day of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthAvailabilityEntry {
    pub day: u32,
    pub available: bool,
}

impl From<MonthAvailabilityItem> for MonthAvailabilityEntry {
    fn from(item: MonthAvailabilityItem) -> Self {
        Self { day: item.day, available: item.available }
    }
}

/// Availability set tagged with the month it was fetched for.
///
/// Every entry's day is valid for `month`; the set is replaced wholesale on
/// each successful fetch and never merged with a previous month's entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthAvailability {
    month: CurrentMonth,
    entries: Vec<MonthAvailabilityEntry>,
}

impl MonthAvailability {
    pub fn new(month: CurrentMonth, entries: Vec<MonthAvailabilityEntry>) -> Self {
        let total = entries.len();
        let entries: Vec<_> = entries
            .into_iter()
            .filter(|entry| month.date(entry.day).is_some())
            .collect();

        if entries.len() != total {
            log::warn!(
                "⚠️ AVAILABILITY: Dropped {} entries with days outside {}",
                total - entries.len(),
                month
            );
        }

        Self { month, entries }
    }

    pub fn month(&self) -> CurrentMonth {
        self.month
    }

    pub fn entries(&self) -> &[MonthAvailabilityEntry] {
        &self.entries
    }

    /// Days flagged `available = false`, materialized against the month
    pub fn unavailable_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries
            .iter()
            .filter(|entry| !entry.available)
            .filter_map(|entry| self.month.date(entry.day))
    }
}
