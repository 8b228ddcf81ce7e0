use chrono::{Datelike, FixedOffset, NaiveDate};
use shared::{AppointmentResponse, DayAppointmentsQuery};

use super::fetch_tracker::{FetchOrdering, FetchStatus, FetchTracker, RequestToken, Settlement};
use super::locale::LocaleRules;
use super::models::{Appointment, DayAppointments, DerivedAppointment};
use crate::error::{DashboardError, Result};

/// A day appointments fetch that has been issued but not yet settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppointmentsRequest {
    pub token: RequestToken,
    pub date: NaiveDate,
}

impl AppointmentsRequest {
    /// Wire query; month is 1-indexed on the wire
    pub fn query(&self) -> DayAppointmentsQuery {
        DayAppointmentsQuery {
            year: self.date.year(),
            month: self.date.month0() + 1,
            day: self.date.day(),
        }
    }
}

/// Owns the appointments of the selected day
#[derive(Debug, Clone)]
pub struct AppointmentSource {
    tracker: FetchTracker,
    data: Option<DayAppointments>,
    revision: u64,
}

impl AppointmentSource {
    pub fn new(ordering: FetchOrdering) -> Self {
        Self {
            tracker: FetchTracker::new(ordering),
            data: None,
            revision: 0,
        }
    }

    pub fn begin(&mut self, date: NaiveDate) -> AppointmentsRequest {
        let token = self.tracker.issue();
        log::info!(
            "📅 APPOINTMENTS: Requesting {} (request #{}, {} in flight, {:?})",
            date,
            token.value(),
            self.tracker.in_flight(),
            self.tracker.ordering()
        );
        AppointmentsRequest { token, date }
    }

    /// Settle a fetch. Same replacement/discard rules as the availability source.
    ///
    /// The API already returns appointments in ascending order; they are kept
    /// as-is. Entries with an unparseable date are dropped.
    pub fn complete(
        &mut self,
        request: &AppointmentsRequest,
        result: Result<Vec<AppointmentResponse>>,
    ) -> Result<Settlement> {
        let responses = match result {
            Ok(responses) => responses,
            Err(error) => return self.fail(request, error),
        };

        let settlement = self.tracker.settle(request.token, true);
        if settlement == Settlement::Discard {
            log::debug!(
                "📅 APPOINTMENTS: Discarding stale response for {} (request #{})",
                request.date,
                request.token.value()
            );
            return Ok(settlement);
        }

        let appointments: Vec<Appointment> = responses
            .into_iter()
            .filter_map(|response| match Appointment::try_from(response) {
                Ok(appointment) => Some(appointment),
                Err(e) => {
                    log::warn!("⚠️ APPOINTMENTS: Skipping malformed appointment: {}", e);
                    None
                }
            })
            .collect();

        log::info!(
            "📅 APPOINTMENTS: Loaded {} appointments for {}",
            appointments.len(),
            request.date
        );
        self.data = Some(DayAppointments::new(request.date, appointments));
        self.revision += 1;
        Ok(settlement)
    }

    fn fail(&mut self, request: &AppointmentsRequest, error: DashboardError) -> Result<Settlement> {
        match self.tracker.settle(request.token, false) {
            Settlement::Discard => {
                log::debug!(
                    "📅 APPOINTMENTS: Ignoring failure of superseded request #{}: {}",
                    request.token.value(),
                    error
                );
                Ok(Settlement::Discard)
            }
            Settlement::Apply => {
                log::error!("❌ APPOINTMENTS: Failed to load {}: {}", request.date, error);
                Err(error)
            }
        }
    }

    pub fn current(&self) -> Option<&DayAppointments> {
        self.data.as_ref()
    }

    pub fn status(&self) -> FetchStatus {
        self.tracker.status()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Attach the `HH:mm` label (in `offset`) to each appointment, keeping order
pub fn derive_appointments(
    appointments: &[Appointment],
    locale: &dyn LocaleRules,
    offset: &FixedOffset,
) -> Vec<DerivedAppointment> {
    appointments
        .iter()
        .map(|appointment| DerivedAppointment {
            hour_formatted: locale.hour_label(&appointment.date.with_timezone(offset)),
            appointment: appointment.clone(),
        })
        .collect()
}
