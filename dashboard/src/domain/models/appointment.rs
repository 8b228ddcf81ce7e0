use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};
use shared::AppointmentResponse;
use uuid::Uuid;

use crate::error::DashboardError;

/// Client who booked the appointment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: Uuid,
    pub date: DateTime<FixedOffset>,
    pub client: Client,
}

impl Appointment {
    /// Hour of day (0-23) in the given local offset
    pub fn local_hour(&self, offset: &FixedOffset) -> u32 {
        self.date.with_timezone(offset).hour()
    }
}

impl TryFrom<AppointmentResponse> for Appointment {
    type Error = DashboardError;

    fn try_from(response: AppointmentResponse) -> Result<Self, Self::Error> {
        let date = DateTime::parse_from_rfc3339(&response.date).map_err(|e| {
            DashboardError::Decode(format!(
                "appointment {} has invalid date '{}': {}",
                response.id, response.date, e
            ))
        })?;

        Ok(Self {
            id: response.id,
            date,
            client: Client {
                name: response.user.name,
                avatar_url: response.user.avatar_url,
            },
        })
    }
}

/// Appointment plus its locale-formatted hour label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAppointment {
    pub appointment: Appointment,
    pub hour_formatted: String,
}

/// One day's appointments, tagged with the day they were fetched for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAppointments {
    date: NaiveDate,
    appointments: Vec<Appointment>,
}

impl DayAppointments {
    pub fn new(date: NaiveDate, appointments: Vec<Appointment>) -> Self {
        Self { date, appointments }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Appointments in the order the API returned them (ascending by time)
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AppointmentUser;

    fn response(date: &str) -> AppointmentResponse {
        AppointmentResponse {
            id: Uuid::new_v4(),
            date: date.to_string(),
            user: AppointmentUser { name: "Ana".to_string(), avatar_url: None },
        }
    }

    #[test]
    fn test_parse_appointment() {
        let appointment = Appointment::try_from(response("2024-01-10T09:00:00Z")).unwrap();
        assert_eq!(appointment.client.name, "Ana");
        assert_eq!(appointment.local_hour(&FixedOffset::east_opt(0).unwrap()), 9);
    }

    #[test]
    fn test_local_hour_follows_offset() {
        let appointment = Appointment::try_from(response("2024-01-10T14:00:00Z")).unwrap();
        // São Paulo (UTC-3)
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(appointment.local_hour(&offset), 11);
    }

    #[test]
    fn test_invalid_date_is_decode_error() {
        let result = Appointment::try_from(response("not-a-date"));
        assert!(matches!(result, Err(DashboardError::Decode(_))));
    }
}
