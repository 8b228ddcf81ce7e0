//! # Dashboard
//!
//! Ties the selection state, the two data sources and the view builder
//! together.
//!
//! ## Flow:
//! 1. The calendar widget reports a day click or a month change
//! 2. The selection state is updated (day clicks go through the guard)
//! 3. The matching source issues a tagged fetch and the task suspends
//! 4. The response lands and replaces the source's data (or is discarded)
//! 5. Listeners are notified and read a freshly derived [`DashboardView`]
//!
//! Everything runs on one thread. State lives in `RefCell`s and no borrow is
//! ever held across an `.await`, so any number of fetches may be in flight.

use chrono::{FixedOffset, NaiveDate};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use super::appointment_source::AppointmentSource;
use super::availability_source::AvailabilitySource;
use super::calendar_widget::CalendarWidget;
use super::fetch_tracker::{FetchStatus, Settlement};
use super::locale::LocaleRules;
use super::models::{CurrentMonth, DayAppointments, DerivedAppointment, MonthAvailability};
use super::selection::{SelectionOutcome, SelectionState};
use super::view_builder::{
    build_view_from, next_appointment, selected_day_appointments, DashboardView, ViewInputs,
};
use crate::api::{FailureReporter, FetchFailure, SchedulingApi, SourceKind};
use crate::clock::Clock;
use crate::config::DashboardConfig;
use crate::error::Result;

/// Runs a widget-triggered task on the host executor
pub type Spawner = Rc<dyn Fn(Pin<Box<dyn Future<Output = ()>>>)>;

struct DashboardState {
    selection: SelectionState,
    availability: AvailabilitySource,
    appointments: AppointmentSource,
}

/// Everything the cached view was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ViewKey {
    selection: SelectionState,
    availability_revision: u64,
    appointments_revision: u64,
    availability_status: FetchStatus,
    appointments_status: FetchStatus,
    today: NaiveDate,
    offset: FixedOffset,
}

struct ViewMemo {
    key: ViewKey,
    derived: Vec<DerivedAppointment>,
    view: DashboardView,
}

pub struct Dashboard<A, R> {
    api: A,
    reporter: R,
    clock: Rc<dyn Clock>,
    locale: Box<dyn LocaleRules>,
    provider_id: String,
    state: RefCell<DashboardState>,
    memo: RefCell<Option<ViewMemo>>,
    rebuilds: Cell<u64>,
    listeners: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl<A: SchedulingApi, R: FailureReporter> Dashboard<A, R> {
    /// Create a dashboard selecting today and showing today's month.
    ///
    /// Nothing is fetched until [`Dashboard::load`] is called.
    pub fn new(config: &DashboardConfig, api: A, reporter: R, clock: Rc<dyn Clock>) -> Self {
        let today = clock.today();
        log::info!("📊 DASHBOARD: Starting on {} for provider {}", today, config.provider_id);

        Self {
            api,
            reporter,
            locale: config.locale.rules(),
            provider_id: config.provider_id.clone(),
            state: RefCell::new(DashboardState {
                selection: SelectionState::new(today),
                availability: AvailabilitySource::new(config.fetch_ordering),
                appointments: AppointmentSource::new(config.fetch_ordering),
            }),
            clock,
            memo: RefCell::new(None),
            rebuilds: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Fetch availability for the visible month and appointments for the
    /// selected day, concurrently
    pub async fn load(&self) {
        futures::join!(self.refresh_availability(), self.refresh_appointments());
    }

    /// Day-click handler. Unselectable days are ignored without error; a
    /// click on the already selected day refetches its appointments.
    pub async fn select_day(&self, day: NaiveDate) -> SelectionOutcome {
        let view = self.view();
        let outcome = self
            .state
            .borrow_mut()
            .selection
            .set_selected_date(day, &view.available_weekdays, &view.disabled_days);

        match outcome {
            SelectionOutcome::Accepted => {
                self.notify();
                self.refresh_appointments().await;
            }
            SelectionOutcome::Unchanged => self.refresh_appointments().await,
            SelectionOutcome::Ignored => {}
        }
        outcome
    }

    /// Month-change handler. Always refetches availability.
    pub async fn change_month(&self, month: CurrentMonth) {
        self.state.borrow_mut().selection.set_current_month(month);
        self.notify();
        self.refresh_availability().await;
    }

    pub async fn next_month(&self) {
        let month = self.selection().current_month().next();
        self.change_month(month).await;
    }

    pub async fn previous_month(&self) {
        let month = self.selection().current_month().previous();
        self.change_month(month).await;
    }

    /// Fetch availability for the visible month
    pub async fn refresh_availability(&self) {
        let request = {
            let mut state = self.state.borrow_mut();
            let month = state.selection.current_month();
            state.availability.begin(month)
        };
        self.notify();

        let result = self.api.month_availability(&self.provider_id, request.query()).await;
        let settled = self.state.borrow_mut().availability.complete(&request, result);
        self.settle(SourceKind::Availability, settled);
    }

    /// Fetch appointments for the selected day
    pub async fn refresh_appointments(&self) {
        let request = {
            let mut state = self.state.borrow_mut();
            let date = state.selection.selected_date();
            state.appointments.begin(date)
        };
        self.notify();

        let result = self.api.day_appointments(request.query()).await;
        let settled = self.state.borrow_mut().appointments.complete(&request, result);
        self.settle(SourceKind::Appointments, settled);
    }

    fn settle(&self, source: SourceKind, settled: Result<Settlement>) {
        match settled {
            Ok(Settlement::Apply) => self.notify(),
            Ok(Settlement::Discard) => {}
            Err(error) => {
                // Previous data stays in place; only the status changed
                self.notify();
                if error.is_recoverable() {
                    self.reporter.report(FetchFailure::new(source, error));
                } else {
                    log::error!("📊 DASHBOARD: {:?} fetch failed: {}", source, error);
                }
            }
        }
    }
}

impl<A, R> Dashboard<A, R> {
    /// Current derived view.
    ///
    /// The view is rebuilt only when one of its inputs changed since the last
    /// call; the next appointment depends on the wall clock and is
    /// re-evaluated on every call.
    pub fn view(&self) -> DashboardView {
        let now = self.clock.now();
        let state = self.state.borrow();
        let key = ViewKey {
            selection: state.selection,
            availability_revision: state.availability.revision(),
            appointments_revision: state.appointments.revision(),
            availability_status: state.availability.status(),
            appointments_status: state.appointments.status(),
            today: now.date_naive(),
            offset: *now.offset(),
        };

        let mut memo = self.memo.borrow_mut();
        if let Some(memo) = memo.as_ref().filter(|memo| memo.key == key) {
            let mut view = memo.view.clone();
            view.next_appointment = next_appointment(&memo.derived, view.selected_date, &now);
            return view;
        }

        let inputs = ViewInputs {
            selection: state.selection,
            availability: state.availability.current(),
            appointments: state.appointments.current(),
            availability_status: state.availability.status(),
            appointments_status: state.appointments.status(),
            now,
        };
        let derived = selected_day_appointments(&inputs, self.locale.as_ref());
        let view = build_view_from(&inputs, &derived, self.locale.as_ref());

        self.rebuilds.set(self.rebuilds.get() + 1);
        log::debug!(
            "📊 DASHBOARD: Rebuilt view #{} for {} ({} morning, {} afternoon)",
            self.rebuild_count(),
            view.selected_date,
            view.morning_appointments.len(),
            view.afternoon_appointments.len()
        );

        *memo = Some(ViewMemo { key, derived, view: view.clone() });
        view
    }

    /// Number of times the view has been rebuilt from scratch
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds.get()
    }

    pub fn selection(&self) -> SelectionState {
        self.state.borrow().selection
    }

    /// Availability set currently held by the source (may belong to another month)
    pub fn availability(&self) -> Option<MonthAvailability> {
        self.state.borrow().availability.current().cloned()
    }

    /// Appointments currently held by the source (may belong to another day)
    pub fn appointments(&self) -> Option<DayAppointments> {
        self.state.borrow().appointments.current().cloned()
    }

    /// Register a callback fired whenever the view may have changed
    pub fn subscribe(&self, listener: Rc<dyn Fn()>) {
        self.listeners.borrow_mut().push(listener);
    }

    fn notify(&self) {
        let listeners: Vec<_> = self.listeners.borrow().iter().cloned().collect();
        for listener in listeners {
            listener();
        }
    }

    /// Push the current month, disabled dates and available weekdays to `widget`
    pub fn sync_widget<W: CalendarWidget>(&self, widget: &mut W) {
        let view = self.view();
        widget.render(view.current_month);
        widget.set_available_weekdays(view.available_weekdays);
        widget.set_disabled_dates(view.disabled_days);
    }
}

impl<A, R> Dashboard<A, R>
where
    A: SchedulingApi + 'static,
    R: FailureReporter + 'static,
{
    /// Wire `widget`'s events to this dashboard and sync its state.
    ///
    /// Handlers run the async mutators through `spawn`.
    pub fn attach_widget<W: CalendarWidget>(self: &Rc<Self>, widget: &mut W, spawn: Spawner) {
        self.sync_widget(widget);

        let dashboard = Rc::clone(self);
        let spawn_click = Rc::clone(&spawn);
        widget.on_day_click(Box::new(move |date| {
            let dashboard = Rc::clone(&dashboard);
            spawn_click(Box::pin(async move {
                dashboard.select_day(date).await;
            }));
        }));

        let dashboard = Rc::clone(self);
        widget.on_month_change(Box::new(move |month| {
            let dashboard = Rc::clone(&dashboard);
            spawn(Box::pin(async move {
                dashboard.change_month(month).await;
            }));
        }));
    }
}
