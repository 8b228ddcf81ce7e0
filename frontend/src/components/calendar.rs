use chrono::{Datelike, NaiveDate};
use dashboard::GridCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub month_label: String,
    pub weekday_labels: Rc<Vec<String>>,
    pub cells: Vec<GridCell>,
    pub loading: bool,
    pub on_day_click: Callback<NaiveDate>,
    pub on_previous_month: Callback<()>,
    pub on_next_month: Callback<()>,
}

/// CSS classes for one grid cell
pub fn day_classes(cell: &GridCell) -> Classes {
    classes!(
        "calendar-day",
        (!cell.in_month).then_some("outside"),
        cell.disabled.then_some("disabled"),
        cell.available.then_some("available"),
        cell.selected.then_some("selected"),
    )
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let on_previous = props.on_previous_month.reform(|_: MouseEvent| ());
    let on_next = props.on_next_month.reform(|_: MouseEvent| ());

    html! {
        <aside class={classes!("calendar", props.loading.then_some("loading"))}>
            <div class="calendar-nav">
                <button class="nav-btn" aria-label="Previous month" onclick={on_previous}>
                    {"‹"}
                </button>
                <h2 class="calendar-caption">{&props.month_label}</h2>
                <button class="nav-btn" aria-label="Next month" onclick={on_next}>{"›"}</button>
            </div>

            <div class="calendar-grid">
                {for props.weekday_labels.iter().map(|label| html! {
                    <div class="calendar-weekday">{label}</div>
                })}

                {for props.cells.iter().map(|cell| {
                    let date = cell.date;
                    let onclick = props.on_day_click.reform(move |_: MouseEvent| date);
                    html! {
                        <button
                            class={day_classes(cell)}
                            disabled={cell.disabled || !cell.in_month}
                            data-date={date.to_string()}
                            {onclick}
                        >
                            {date.day()}
                        </button>
                    }
                })}
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_day_classes() {
        let cell = GridCell {
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            in_month: true,
            disabled: false,
            available: true,
            selected: true,
        };
        assert_eq!(day_classes(&cell).to_string(), "calendar-day available selected");

        let cell = GridCell {
            in_month: false,
            disabled: true,
            available: false,
            selected: false,
            ..cell
        };
        assert_eq!(day_classes(&cell).to_string(), "calendar-day outside disabled");
    }
}
