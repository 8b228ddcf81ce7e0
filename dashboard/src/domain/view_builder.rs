//! Derived view builder.
//!
//! Everything the calendar and the appointment lists render is computed here
//! from the selection state, the availability set and the day's appointments.
//! All functions are pure: the same inputs always produce the same view, and
//! nothing in this module holds state.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Weekday};
use std::collections::{BTreeSet, HashSet};

use super::appointment_source::derive_appointments;
use super::fetch_tracker::FetchStatus;
use super::locale::LocaleRules;
use super::models::{CurrentMonth, DayAppointments, DerivedAppointment, MonthAvailability};
use super::selection::SelectionState;

/// Appointments starting at or after this hour belong to the afternoon
pub const AFTERNOON_STARTS_AT: u32 = 12;

/// Snapshot of everything the view depends on
#[derive(Debug, Clone, Copy)]
pub struct ViewInputs<'a> {
    pub selection: SelectionState,
    pub availability: Option<&'a MonthAvailability>,
    pub appointments: Option<&'a DayAppointments>,
    pub availability_status: FetchStatus,
    pub appointments_status: FetchStatus,
    /// Wall-clock time of evaluation; its offset is the local timezone
    pub now: DateTime<FixedOffset>,
}

/// All values the presentation layer renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub current_month: CurrentMonth,
    pub current_month_label: String,
    pub selected_date: NaiveDate,
    pub is_today: bool,
    pub disabled_days: BTreeSet<NaiveDate>,
    pub available_weekdays: HashSet<Weekday>,
    pub selected_date_as_text: String,
    pub selected_week_day: String,
    pub morning_appointments: Vec<DerivedAppointment>,
    pub afternoon_appointments: Vec<DerivedAppointment>,
    pub next_appointment: Option<DerivedAppointment>,
    pub availability_status: FetchStatus,
    pub appointments_status: FetchStatus,
}

impl DashboardView {
    pub fn is_loading_availability(&self) -> bool {
        self.availability_status == FetchStatus::Fetching
    }

    pub fn is_loading_appointments(&self) -> bool {
        self.appointments_status == FetchStatus::Fetching
    }
}

/// The selected day's appointments with their hour labels, in API order.
///
/// Appointments fetched for any other day are ignored.
pub fn selected_day_appointments(
    inputs: &ViewInputs<'_>,
    locale: &dyn LocaleRules,
) -> Vec<DerivedAppointment> {
    inputs
        .appointments
        .filter(|day| day.date() == inputs.selection.selected_date())
        .map(|day| derive_appointments(day.appointments(), locale, inputs.now.offset()))
        .unwrap_or_default()
}

/// Build the view around already derived appointments
pub fn build_view_from(
    inputs: &ViewInputs<'_>,
    derived: &[DerivedAppointment],
    locale: &dyn LocaleRules,
) -> DashboardView {
    let selected_date = inputs.selection.selected_date();
    let current_month = inputs.selection.current_month();
    let today = inputs.now.date_naive();

    let next = next_appointment(derived, selected_date, &inputs.now);
    let (morning, afternoon) = split_by_period(derived.to_vec(), inputs.now.offset());

    DashboardView {
        current_month,
        current_month_label: locale.month_label(current_month),
        selected_date,
        is_today: selected_date == today,
        disabled_days: disabled_days(current_month, inputs.availability),
        available_weekdays: available_weekdays(),
        selected_date_as_text: locale.day_of_month_text(selected_date),
        selected_week_day: locale.weekday_long_form(selected_date.weekday()),
        morning_appointments: morning,
        afternoon_appointments: afternoon,
        next_appointment: next,
        availability_status: inputs.availability_status,
        appointments_status: inputs.appointments_status,
    }
}

/// Weekdays the calendar marks as bookable (Monday to Friday)
pub fn available_weekdays() -> HashSet<Weekday> {
    [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
        .into_iter()
        .collect()
}

/// Unavailable days of `month` plus every Saturday and Sunday of it.
///
/// An availability set fetched for another month contributes nothing.
pub fn disabled_days(
    month: CurrentMonth,
    availability: Option<&MonthAvailability>,
) -> BTreeSet<NaiveDate> {
    let weekends = month
        .days()
        .filter(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun));

    let unavailable = availability
        .filter(|availability| availability.month() == month)
        .into_iter()
        .flat_map(|availability| availability.unavailable_days());

    weekends.chain(unavailable).collect()
}

/// Split into (morning, afternoon) by local hour, preserving order
pub fn split_by_period(
    appointments: Vec<DerivedAppointment>,
    offset: &FixedOffset,
) -> (Vec<DerivedAppointment>, Vec<DerivedAppointment>) {
    appointments
        .into_iter()
        .partition(|derived| derived.appointment.local_hour(offset) < AFTERNOON_STARTS_AT)
}

/// First appointment strictly after `now`, only when `selected_date` is today
pub fn next_appointment(
    appointments: &[DerivedAppointment],
    selected_date: NaiveDate,
    now: &DateTime<FixedOffset>,
) -> Option<DerivedAppointment> {
    if selected_date != now.date_naive() {
        return None;
    }

    appointments
        .iter()
        .find(|derived| derived.appointment.date > *now)
        .cloned()
}
