//! View-model for the provider's appointment dashboard.
//!
//! Combines the visible month's availability and the selected day's
//! appointments with the user's selection, and derives everything the
//! calendar and the appointment lists render. Rendering itself lives in the
//! web front end.

pub mod api;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;

pub use api::{FailureReporter, FetchFailure, LogReporter, SchedulingApi, SourceKind};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::DashboardConfig;
pub use domain::calendar_widget::{CalendarWidget, GridCell, MonthGrid};
pub use domain::dashboard_service::{Dashboard, Spawner};
pub use domain::fetch_tracker::{FetchOrdering, FetchStatus};
pub use domain::locale::{EnUs, LocaleRules, LocaleTag, PtBr};
pub use domain::models::{Appointment, Client, CurrentMonth, DerivedAppointment, MonthAvailability};
pub use domain::selection::SelectionOutcome;
pub use domain::view_builder::DashboardView;
pub use error::DashboardError;
