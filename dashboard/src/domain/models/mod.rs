pub mod appointment;
pub mod availability;
pub mod month;

pub use appointment::{Appointment, Client, DayAppointments, DerivedAppointment};
pub use availability::{MonthAvailability, MonthAvailabilityEntry};
pub use month::CurrentMonth;
