use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Availability flag for a single day of a provider's month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAvailabilityItem {
    /// Day of the month (1-31)
    pub day: u32,
    /// Whether bookings are still open on that day
    pub available: bool,
}

/// Client attached to an appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentUser {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Appointment as returned by `GET /appointments/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    /// Instant of the appointment (RFC 3339 / ISO-8601)
    pub date: String,
    pub user: AppointmentUser,
}

/// Query for a provider's month availability.
///
/// `month` is 1-indexed, exactly as the API expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAvailabilityQuery {
    pub year: i32,
    pub month: u32,
}

impl MonthAvailabilityQuery {
    /// Request path (relative to the API base URL) for the given provider
    pub fn path(&self, provider_id: &str) -> String {
        format!(
            "/providers/{}/month-availability?year={}&month={}",
            provider_id, self.year, self.month
        )
    }
}

/// Query for the signed-in provider's appointments on one day.
///
/// `month` is 1-indexed, exactly as the API expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAppointmentsQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DayAppointmentsQuery {
    /// Request path (relative to the API base URL)
    pub fn path(&self) -> String {
        format!(
            "/appointments/me?year={}&month={}&day={}",
            self.year, self.month, self.day
        )
    }
}

/// Signed-in user as persisted by the sign-in flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
