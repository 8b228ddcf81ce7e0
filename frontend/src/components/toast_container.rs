use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_toasts::{Toast, ToastKind, TOAST_DURATION_MS};

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "info",
        ToastKind::Error => "error",
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let id = props.toast.id;
    let onclick = props.on_dismiss.reform(move |_: MouseEvent| id);

    html! {
        <div class={classes!("toast", kind_class(props.toast.kind))}>
            <div>
                <strong>{&props.toast.title}</strong>
                {if let Some(description) = &props.toast.description {
                    html! { <p>{description}</p> }
                } else {
                    html! {}
                }}
            </div>
            <button class="toast-close" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div class="toast-container">
            {for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            })}
        </div>
    }
}
