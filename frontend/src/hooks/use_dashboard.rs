use chrono::{NaiveDate, Weekday};
use dashboard::{
    Dashboard, DashboardConfig, DashboardView, GridCell, MonthGrid, Spawner, SystemClock,
};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_toasts::ToastReporter;
use crate::services::api::ApiClient;

pub type WebDashboard = Dashboard<ApiClient, ToastReporter>;

const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed,
    Weekday::Thu, Weekday::Fri, Weekday::Sat,
];

pub struct UseDashboardResult {
    pub view: DashboardView,
    pub cells: Vec<GridCell>,
    pub weekday_labels: Rc<Vec<String>>,
    pub actions: UseDashboardActions,
}

#[derive(Clone)]
pub struct UseDashboardActions {
    pub select_day: Callback<NaiveDate>,
    pub previous_month: Callback<()>,
    pub next_month: Callback<()>,
}

/// Three-letter weekday headers for the grid, Sunday first
pub fn weekday_labels(config: &DashboardConfig) -> Vec<String> {
    let rules = config.locale.rules();
    SUNDAY_FIRST
        .iter()
        .map(|weekday| rules.weekday_name(*weekday).chars().take(3).collect())
        .collect()
}

#[hook]
pub fn use_dashboard(
    config: &DashboardConfig,
    api_client: &ApiClient,
    reporter: &ToastReporter,
) -> UseDashboardResult {
    let force_update = use_force_update();
    let grid = use_mut_ref(MonthGrid::new);

    let dashboard = {
        let config = config.clone();
        let api_client = api_client.clone();
        let reporter = reporter.clone();
        use_memo((), move |_| {
            log::info!(
                "🗓️ DASHBOARD: starting for provider '{}' ({:?}, {:?})",
                config.provider_id,
                config.locale,
                config.fetch_ordering
            );
            WebDashboard::new(&config, api_client, reporter, Rc::new(SystemClock))
        })
    };

    let weekday_labels = {
        let config = config.clone();
        use_memo((), move |_| weekday_labels(&config))
    };

    // Wire the grid, re-render on every change and run the initial load
    {
        let dashboard = dashboard.clone();
        let grid = grid.clone();
        use_effect_with((), move |_| {
            let listener = force_update.clone();
            dashboard.subscribe(Rc::new(move || listener.force_update()));

            let spawner: Spawner =
                Rc::new(|task: Pin<Box<dyn Future<Output = ()>>>| spawn_local(task));
            dashboard.attach_widget(&mut *grid.borrow_mut(), spawner);

            let loader = dashboard.clone();
            spawn_local(async move {
                loader.load().await;
            });
            || ()
        });
    }

    let view = dashboard.view();
    let cells = {
        let mut grid = grid.borrow_mut();
        dashboard.sync_widget(&mut *grid);
        grid.set_selected(view.selected_date);
        grid.cells()
    };

    let select_day = {
        let grid = grid.clone();
        use_callback((), move |date: NaiveDate, _| grid.borrow().click(date))
    };

    let previous_month = {
        let grid = grid.clone();
        use_callback((), move |_: (), _| grid.borrow().request_previous_month())
    };

    let next_month = {
        let grid = grid.clone();
        use_callback((), move |_: (), _| grid.borrow().request_next_month())
    };

    UseDashboardResult {
        view,
        cells,
        weekday_labels,
        actions: UseDashboardActions {
            select_day,
            previous_month,
            next_month,
        },
    }
}
