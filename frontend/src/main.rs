mod components;
mod hooks;
mod services;

use dashboard::DashboardConfig;
use log::LevelFilter;
use yew::prelude::*;

use components::appointment_list::AppointmentList;
use components::calendar::Calendar;
use components::header::Header;
use components::toast_container::ToastContainer;
use hooks::use_dashboard::use_dashboard;
use hooks::use_toasts::{use_toasts, ToastReporter};
use services::api::ApiClient;
use services::session::Session;

#[derive(Properties, PartialEq)]
struct DashboardPageProps {
    config: DashboardConfig,
    api_client: ApiClient,
    reporter: ToastReporter,
}

#[function_component(DashboardPage)]
fn dashboard_page(props: &DashboardPageProps) -> Html {
    let dashboard = use_dashboard(&props.config, &props.api_client, &props.reporter);

    html! {
        <div class="content">
            <AppointmentList view={dashboard.view.clone()} />
            <Calendar
                month_label={dashboard.view.current_month_label.clone()}
                weekday_labels={dashboard.weekday_labels.clone()}
                cells={dashboard.cells}
                loading={dashboard.view.is_loading_availability()}
                on_day_click={dashboard.actions.select_day}
                on_previous_month={dashboard.actions.previous_month}
                on_next_month={dashboard.actions.next_month}
            />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let session = use_memo((), |_| Session::restore());
    let config = {
        let session = session.clone();
        use_memo((), move |_| services::app_config::load(&session))
    };
    let api_client = {
        let config = config.clone();
        let session = session.clone();
        use_memo((), move |_| ApiClient::new(&config, session.token.clone()))
    };
    let toasts = use_toasts();

    let on_sign_out = use_callback((), |_: (), _| {
        Session::sign_out();
        if let Err(e) = gloo::utils::window().location().set_href("/") {
            log::error!("🔐 SESSION: failed to navigate after sign-out: {:?}", e);
        }
    });

    {
        let session = session.clone();
        let config = config.clone();
        let notify = toasts.notify.clone();
        use_effect_with((), move |_| {
            if !session.is_authenticated() {
                log::warn!("🔐 SESSION: no token found, requests will be unauthenticated");
                notify.emit((
                    "Not signed in".to_string(),
                    "Sign in to see your appointments".to_string(),
                ));
            }
            if let Some(problem) = services::app_config::config_problem(&config) {
                notify.emit(problem);
            }
            || ()
        });
    }

    html! {
        <div class="app">
            <Header user={session.user.clone()} {on_sign_out} />
            <DashboardPage
                config={(*config).clone()}
                api_client={(*api_client).clone()}
                reporter={toasts.reporter.clone()}
            />
            <ToastContainer toasts={toasts.toasts} on_dismiss={toasts.dismiss} />
        </div>
    }
}

fn main() {
    services::logging::ConsoleLogger::init(LevelFilter::Info);
    log::info!("🚀 Starting appointment dashboard");
    yew::Renderer::<App>::new().render();
}
