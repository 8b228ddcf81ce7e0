//! Appointment panel: the selected day, the next appointment banner and the
//! morning/afternoon lists.

use dashboard::{DashboardView, DerivedAppointment, FetchStatus};
use yew::prelude::*;

pub const EMPTY_PERIOD_TEXT: &str = "No appointments in this period";
pub const LOAD_FAILED_TEXT: &str = "Could not load appointments. Click the day again to retry.";

/// The day's appointments could not be loaded and there is nothing to show
pub fn is_load_failure(view: &DashboardView) -> bool {
    view.appointments_status == FetchStatus::Failed
        && view.morning_appointments.is_empty()
        && view.afternoon_appointments.is_empty()
}

#[derive(Properties, PartialEq)]
struct AvatarProps {
    name: String,
    url: Option<String>,
}

#[function_component(Avatar)]
fn avatar(props: &AvatarProps) -> Html {
    match &props.url {
        Some(url) => html! { <img class="avatar" src={url.clone()} alt={props.name.clone()} /> },
        None => {
            let initial: String = props
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default();
            html! { <span class="avatar placeholder">{initial}</span> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NextAppointmentProps {
    pub appointment: DerivedAppointment,
}

#[function_component(NextAppointment)]
pub fn next_appointment(props: &NextAppointmentProps) -> Html {
    let client = &props.appointment.appointment.client;
    html! {
        <div class="next-appointment">
            <strong>{"Next appointment"}</strong>
            <div class="appointment-card highlighted">
                <Avatar name={client.name.clone()} url={client.avatar_url.clone()} />
                <span class="client-name">{&client.name}</span>
                <span class="hour">{"🕑 "}{&props.appointment.hour_formatted}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PeriodSectionProps {
    pub title: &'static str,
    pub appointments: Vec<DerivedAppointment>,
}

#[function_component(PeriodSection)]
pub fn period_section(props: &PeriodSectionProps) -> Html {
    html! {
        <section class="period">
            <strong>{props.title}</strong>
            {if props.appointments.is_empty() {
                html! { <p class="empty-period">{EMPTY_PERIOD_TEXT}</p> }
            } else {
                props.appointments.iter().map(|derived| {
                    let client = &derived.appointment.client;
                    html! {
                        <div class="appointment" key={derived.appointment.id.to_string()}>
                            <span class="hour">{"🕑 "}{&derived.hour_formatted}</span>
                            <div class="appointment-card">
                                <Avatar
                                    name={client.name.clone()}
                                    url={client.avatar_url.clone()}
                                />
                                <span class="client-name">{&client.name}</span>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppointmentListProps {
    pub view: DashboardView,
}

#[function_component(AppointmentList)]
pub fn appointment_list(props: &AppointmentListProps) -> Html {
    let view = &props.view;

    html! {
        <main class="schedule">
            <h1>{"Scheduled appointments"}</h1>
            <p class="selected-day">
                {if view.is_today { html! { <span>{"Today"}</span> } } else { html! {} }}
                <span>{&view.selected_date_as_text}</span>
                <span>{&view.selected_week_day}</span>
            </p>

            {if let Some(next) = &view.next_appointment {
                html! { <NextAppointment appointment={next.clone()} /> }
            } else {
                html! {}
            }}

            {if view.is_loading_appointments() {
                html! { <p class="loading">{"Loading..."}</p> }
            } else {
                html! {}
            }}

            {if is_load_failure(view) {
                html! { <p class="load-failed">{LOAD_FAILED_TEXT}</p> }
            } else {
                html! {
                    <>
                        <PeriodSection
                            title="Morning"
                            appointments={view.morning_appointments.clone()}
                        />
                        <PeriodSection
                            title="Afternoon"
                            appointments={view.afternoon_appointments.clone()}
                        />
                    </>
                }
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dashboard::CurrentMonth;
    use std::collections::{BTreeSet, HashSet};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn empty_view(appointments_status: FetchStatus) -> DashboardView {
        DashboardView {
            current_month: CurrentMonth::new(2024, 0).unwrap(),
            current_month_label: "Janeiro 2024".to_string(),
            selected_date: NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
            is_today: false,
            disabled_days: BTreeSet::new(),
            available_weekdays: HashSet::new(),
            selected_date_as_text: "Dia 11 de janeiro".to_string(),
            selected_week_day: "quinta-feira".to_string(),
            morning_appointments: Vec::new(),
            afternoon_appointments: Vec::new(),
            next_appointment: None,
            availability_status: FetchStatus::Populated,
            appointments_status,
        }
    }

    #[wasm_bindgen_test]
    fn test_failed_empty_day_is_a_load_failure() {
        assert!(is_load_failure(&empty_view(FetchStatus::Failed)));
    }

    #[wasm_bindgen_test]
    fn test_loaded_empty_day_is_not_a_load_failure() {
        assert!(!is_load_failure(&empty_view(FetchStatus::Populated)));
        assert!(!is_load_failure(&empty_view(FetchStatus::Fetching)));
    }
}
