use booking_shared::{MAX_GUESTS, MIN_GUESTS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuestSelectorProps {
    pub count: u8,
    /// Emits +1 or -1
    pub on_change: Callback<i32>,
    pub on_done: Callback<()>,
}

#[function_component(GuestSelector)]
pub fn guest_selector(props: &GuestSelectorProps) -> Html {
    let on_minus = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(-1))
    };
    let on_plus = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(1))
    };
    let on_done = {
        let on_done = props.on_done.clone();
        Callback::from(move |_: MouseEvent| on_done.emit(()))
    };

    html! {
        <div class="guest-selector">
            <div class="guest-row">
                <span class="guest-label">{"Adultos"}</span>
                <div class="guest-counter">
                    <button
                        type="button"
                        class="guest-btn"
                        onclick={on_minus}
                        disabled={props.count <= MIN_GUESTS}
                    >
                        {"−"}
                    </button>
                    <span class="guest-count">{props.count}</span>
                    <button
                        type="button"
                        class="guest-btn"
                        onclick={on_plus}
                        disabled={props.count >= MAX_GUESTS}
                    >
                        {"+"}
                    </button>
                </div>
            </div>
            <small class="guest-hint">{format!("Máximo {} huéspedes por habitación", MAX_GUESTS)}</small>
            <button type="button" class="btn btn-primary" onclick={on_done}>{"LISTO"}</button>
        </div>
    }
}
