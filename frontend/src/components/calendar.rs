use booking_shared::{CalendarDayCell, CalendarMonthView, DualCalendarView};
use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

const WEEKDAYS: [&str; 7] = ["Do", "Lu", "Ma", "Mi", "Ju", "Vi", "Sá"];

#[derive(Properties, PartialEq)]
pub struct DualCalendarProps {
    pub view: DualCalendarView,
    pub on_select: Callback<NaiveDate>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_confirm: Callback<()>,
}

/// Two side-by-side months of the date-range picker
#[function_component(DualCalendar)]
pub fn dual_calendar(props: &DualCalendarProps) -> Html {
    let on_prev = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| on_prev.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <div class="dual-calendar">
            <div class="calendar-nav">
                <button
                    type="button"
                    class="calendar-nav-btn"
                    onclick={on_prev}
                    disabled={!props.view.can_go_back}
                >
                    {"‹"}
                </button>
                <button type="button" class="calendar-nav-btn" onclick={on_next}>
                    {"›"}
                </button>
            </div>
            <div class="calendar-months">
                {month_grid(&props.view.left, &props.on_select)}
                {month_grid(&props.view.right, &props.on_select)}
            </div>
            <div class="calendar-actions">
                <button type="button" class="btn btn-primary" onclick={on_confirm}>
                    {"CONFIRMAR FECHAS"}
                </button>
            </div>
        </div>
    }
}

fn month_grid(month: &CalendarMonthView, on_select: &Callback<NaiveDate>) -> Html {
    html! {
        <div class="calendar-month">
            <div class="calendar-title">{&month.title}</div>
            <div class="calendar-grid">
                {for WEEKDAYS.iter().map(|name| html! {
                    <div class="calendar-weekday">{*name}</div>
                })}
                {for month.cells.iter().map(|cell| day_cell(cell, on_select))}
            </div>
        </div>
    }
}

fn day_cell(cell: &CalendarDayCell, on_select: &Callback<NaiveDate>) -> Html {
    let class = cell.css_class();
    match cell.date() {
        Some(date) if cell.is_selectable() => {
            let on_select = on_select.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_select.emit(date));
            html! { <div {class} {onclick}>{date.day()}</div> }
        }
        Some(date) => html! { <div {class}>{date.day()}</div> },
        None => html! { <div {class}></div> },
    }
}
