use booking_shared::CartView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CartSummaryProps {
    pub view: CartView,
    pub on_continue: Callback<()>,
}

/// Sidebar summary of the in-progress booking
#[function_component(CartSummary)]
pub fn cart_summary(props: &CartSummaryProps) -> Html {
    let view = &props.view;
    let on_continue = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| on_continue.emit(()))
    };

    html! {
        <aside class="booking-cart">
            <h4 class="cart-title">{"Tu reserva"}</h4>
            <div class="cart-row">
                <span class="cart-label">{"Fechas"}</span>
                <span class="cart-value">
                    {view.dates_label.clone().unwrap_or_else(|| "Selecciona tus fechas".to_string())}
                </span>
            </div>
            <div class="cart-row">
                <span class="cart-label">{"Huéspedes"}</span>
                <span class="cart-value">{&view.guests_label}</span>
            </div>
            if let Some(room_name) = &view.room_name {
                <div class="cart-row">
                    <span class="cart-label">{"Habitación"}</span>
                    <span class="cart-value">{room_name}</span>
                </div>
                <div class="cart-row">
                    <span class="cart-label">{"Noches"}</span>
                    <span class="cart-value">{view.nights}</span>
                </div>
            }
            <div class="cart-total">
                <span>{"Total"}</span>
                <strong>{&view.total_label}</strong>
            </div>
            <button
                type="button"
                class="btn btn-primary cart-continue"
                onclick={on_continue}
                disabled={!view.can_continue}
            >
                {"CONTINUAR"}
            </button>
        </aside>
    }
}
