//! Seams between the dashboard core and its collaborators: the booking API
//! and whatever surfaces failures to the user (toasts in the web shell).

use async_trait::async_trait;
use shared::{
    AppointmentResponse, DayAppointmentsQuery, MonthAvailabilityItem, MonthAvailabilityQuery,
};
use std::rc::Rc;

use crate::error::{DashboardError, Result};

/// Read access to the booking API.
///
/// Implementations run on a single-threaded executor (the browser), hence `?Send`.
#[async_trait(?Send)]
pub trait SchedulingApi {
    /// `GET /providers/{provider_id}/month-availability?year=Y&month=M`
    async fn month_availability(
        &self,
        provider_id: &str,
        query: MonthAvailabilityQuery,
    ) -> Result<Vec<MonthAvailabilityItem>>;

    /// `GET /appointments/me?year=Y&month=M&day=D`
    async fn day_appointments(
        &self,
        query: DayAppointmentsQuery,
    ) -> Result<Vec<AppointmentResponse>>;
}

#[async_trait(?Send)]
impl<T: SchedulingApi + ?Sized> SchedulingApi for Rc<T> {
    async fn month_availability(
        &self,
        provider_id: &str,
        query: MonthAvailabilityQuery,
    ) -> Result<Vec<MonthAvailabilityItem>> {
        (**self).month_availability(provider_id, query).await
    }

    async fn day_appointments(
        &self,
        query: DayAppointmentsQuery,
    ) -> Result<Vec<AppointmentResponse>> {
        (**self).day_appointments(query).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Availability,
    Appointments,
}

/// A fetch failure, ready to be shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub source: SourceKind,
    pub title: String,
    pub description: String,
    pub error: DashboardError,
}

impl FetchFailure {
    pub fn new(source: SourceKind, error: DashboardError) -> Self {
        let title = match source {
            SourceKind::Availability => "Could not load availability",
            SourceKind::Appointments => "Could not load appointments",
        };

        Self {
            source,
            title: title.to_string(),
            description: error.to_string(),
            error,
        }
    }
}

/// Receives recoverable fetch failures
pub trait FailureReporter {
    fn report(&self, failure: FetchFailure);
}

impl<T: FailureReporter + ?Sized> FailureReporter for Rc<T> {
    fn report(&self, failure: FetchFailure) {
        (**self).report(failure)
    }
}

/// Reporter that only writes to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl FailureReporter for LogReporter {
    fn report(&self, failure: FetchFailure) {
        log::warn!("⚠️ {}: {}", failure.title, failure.description);
    }
}
