use dashboard::{FailureReporter, FetchFailure};
use std::rc::Rc;
use yew::prelude::*;

/// Toasts dismiss themselves after this long
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

pub enum ToastAction {
    Push {
        kind: ToastKind,
        title: String,
        description: Option<String>,
    },
    Dismiss(u32),
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastList {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { kind, title, description } => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    kind,
                    title,
                    description,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                next.toasts.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Surfaces dashboard fetch failures as error toasts
#[derive(Clone, PartialEq)]
pub struct ToastReporter {
    dispatcher: UseReducerDispatcher<ToastList>,
}

impl FailureReporter for ToastReporter {
    fn report(&self, failure: FetchFailure) {
        log::error!("🍞 TOAST: {} ({})", failure.title, failure.error);
        self.dispatcher.dispatch(ToastAction::Push {
            kind: ToastKind::Error,
            title: failure.title,
            description: Some(failure.description),
        });
    }
}

pub struct UseToastsResult {
    pub toasts: Vec<Toast>,
    pub reporter: ToastReporter,
    pub dismiss: Callback<u32>,
    /// Show an informational toast from a title and description
    pub notify: Callback<(String, String)>,
}

#[hook]
pub fn use_toasts() -> UseToastsResult {
    let list = use_reducer(ToastList::default);

    let dismiss = {
        let dispatcher = list.dispatcher();
        use_callback((), move |id: u32, _| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let notify = {
        let dispatcher = list.dispatcher();
        use_callback((), move |(title, description): (String, String), _| {
            dispatcher.dispatch(ToastAction::Push {
                kind: ToastKind::Info,
                title,
                description: Some(description),
            })
        })
    };

    UseToastsResult {
        toasts: list.toasts().to_vec(),
        reporter: ToastReporter {
            dispatcher: list.dispatcher(),
        },
        dismiss,
        notify,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn push(list: Rc<ToastList>, title: &str) -> Rc<ToastList> {
        list.reduce(ToastAction::Push {
            kind: ToastKind::Error,
            title: title.to_string(),
            description: None,
        })
    }

    #[wasm_bindgen_test]
    fn test_push_assigns_increasing_ids() {
        let list = push(push(Rc::new(ToastList::default()), "first"), "second");
        let ids: Vec<u32> = list.toasts().iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[wasm_bindgen_test]
    fn test_dismiss_removes_only_that_toast() {
        let list = push(push(Rc::new(ToastList::default()), "first"), "second");
        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts().len(), 1);
        assert_eq!(list.toasts()[0].title, "second");

        // Unknown ids are ignored
        let list = list.reduce(ToastAction::Dismiss(42));
        assert_eq!(list.toasts().len(), 1);
    }
}
