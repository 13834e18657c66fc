use booking_shared::checkout::{COUNTRIES, FAVOURITE_COUNTRIES};
use booking_shared::{
    AcknowledgementGate, BookingError, CheckoutDraft, CheckoutForm, PaymentMethod,
};
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::context::{AppContext, Page};
use crate::hooks::use_booking::BookingAction;
use crate::services::api::ApiError;
use crate::services::logging::Logger;
use crate::services::session_storage::BrowserSessionStore;

#[derive(Properties, PartialEq)]
pub struct CheckoutPageProps {
    pub ctx: AppContext,
}

fn save_draft(form: &CheckoutForm) {
    if let Err(e) = CheckoutDraft::save(&BrowserSessionStore, form) {
        Logger::warn_with_component("checkout", &format!("draft not saved: {}", e));
    }
}

#[function_component(CheckoutPage)]
pub fn checkout_page(props: &CheckoutPageProps) -> Html {
    let ctx = &props.ctx;
    let form = use_state(|| CheckoutDraft::load(&BrowserSessionStore));
    let gate = use_state(AcknowledgementGate::default);
    let is_submitting = use_state(|| false);
    let requests_open = use_state(|| false);
    let confirmed_code = use_state(|| None::<String>);

    // Arriving without dates and a room, or without a session, sends the guest back
    use_effect_with((), {
        let ctx = ctx.clone();
        move |_| {
            if !ctx.booking.controller.checkout_ready() || !ctx.session.is_logged_in() {
                Logger::info_with_component("checkout", "nothing to check out, back to booking");
                ctx.go(Page::Booking);
            }
            || ()
        }
    });

    // Contact fields come from the profile; whatever the guest already typed wins
    use_effect_with(ctx.session.guest_id(), {
        let ctx = ctx.clone();
        let form = form.clone();
        move |guest_id| {
            if let Some(guest_id) = *guest_id {
                spawn_local(async move {
                    match ctx.api.get_guest(guest_id).await {
                        Ok(profile) => {
                            let draft = CheckoutDraft::load(&BrowserSessionStore);
                            let mut next = draft.clone();
                            next.prefill(&profile);
                            if !draft.phone.is_empty() {
                                next.phone = draft.phone;
                            }
                            if !draft.mobile_phone.is_empty() {
                                next.mobile_phone = draft.mobile_phone;
                            }
                            form.set(next);
                        }
                        Err(ApiError::Network(e)) => {
                            Logger::error_with_component("checkout", &format!("profile request failed: {}", e));
                            ctx.notifier.error("Error de red al intentar cargar tus datos.");
                        }
                        Err(e) => {
                            Logger::warn_with_component("checkout", &format!("profile not loaded: {}", e));
                            ctx.notifier.error(
                                "No pudimos cargar tus datos de perfil. Intenta recargar la página.",
                            );
                        }
                    }
                });
            }
            || ()
        }
    });

    use_effect_with((*confirmed_code).clone(), {
        let ctx = ctx.clone();
        let delay = ctx.config.reservation_redirect_ms;
        move |code| {
            let redirect = code
                .as_ref()
                .map(|_| Timeout::new(delay, move || ctx.go(Page::Reservations)));
            move || drop(redirect)
        }
    });

    let text_field = |apply: fn(&mut CheckoutForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            save_draft(&next);
            form.set(next);
        })
    };

    let on_country_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.country = select.value();
            save_draft(&next);
            form.set(next);
        })
    };

    let on_payment_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.payment_method = PaymentMethod::from_code(&select.value());
            save_draft(&next);
            form.set(next);
        })
    };

    let on_observations_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.observations = area.value();
            save_draft(&next);
            form.set(next);
        })
    };

    let toggle_requests = {
        let requests_open = requests_open.clone();
        Callback::from(move |_: MouseEvent| requests_open.set(!*requests_open))
    };

    let checkbox = |apply: fn(&mut AcknowledgementGate, bool)| {
        let gate = gate.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = *gate;
            apply(&mut next, input.checked());
            gate.set(next);
        })
    };

    let on_submit = {
        let ctx = ctx.clone();
        let form = form.clone();
        let gate = gate.clone();
        let is_submitting = is_submitting.clone();
        let confirmed_code = confirmed_code.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if let Err(e) = gate.require() {
                ctx.notifier.error(e.to_string());
                return;
            }
            let contact = match form.validate() {
                Ok(contact) => contact,
                Err(e) => {
                    ctx.notifier.error(e.to_string());
                    return;
                }
            };
            let Some(guest_id) = ctx.session.guest_id() else {
                ctx.notifier.error(BookingError::NotLoggedIn.to_string());
                return;
            };
            let request = match ctx.booking.controller.reservation_request(guest_id, &contact) {
                Ok(request) => request,
                Err(e) => {
                    ctx.notifier.error(e.to_string());
                    ctx.go(Page::Booking);
                    return;
                }
            };

            is_submitting.set(true);
            let ctx = ctx.clone();
            let is_submitting = is_submitting.clone();
            let confirmed_code = confirmed_code.clone();

            spawn_local(async move {
                match ctx.api.confirm_reservation(&request).await {
                    Ok(response) => {
                        Logger::info_with_component(
                            "checkout",
                            &format!("reservation {} confirmed", response.reservation_code),
                        );
                        ctx.notifier.info(format!(
                            "¡Reserva exitosa! Tu código es: {}",
                            response.reservation_code
                        ));
                        ctx.booking.dispatch(BookingAction::ClearAfterReservation);
                        confirmed_code.set(Some(response.reservation_code));
                    }
                    Err(ApiError::Network(e)) => {
                        Logger::error_with_component("checkout", &format!("confirm request failed: {}", e));
                        ctx.notifier.error("Error de conexión. Por favor, intenta de nuevo.");
                        is_submitting.set(false);
                    }
                    Err(e) => {
                        Logger::warn_with_component("checkout", &format!("reservation rejected: {}", e));
                        ctx.notifier.error(format!(
                            "Error en la reserva: {}",
                            e.user_message("no se pudo confirmar la reserva")
                        ));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    if let Some(code) = &*confirmed_code {
        return html! {
            <section class="checkout-page checkout-done">
                <h2>{"¡Reserva confirmada!"}</h2>
                <p>{"Tu código de reserva es "}<strong>{code}</strong></p>
                <p class="checkout-redirect">{"Te llevamos a tus reservas..."}</p>
            </section>
        };
    }

    let controller = &ctx.booking.controller;
    let cart = controller.cart_view();
    let room_label = controller
        .selected_room()
        .map(|room| format!("HABITACION: {}", room.name.to_uppercase()))
        .unwrap_or_default();

    let countries = FAVOURITE_COUNTRIES
        .iter()
        .chain(COUNTRIES.iter().filter(|c| !FAVOURITE_COUNTRIES.contains(*c)));
    let selected_payment = form.payment_method.unwrap_or(PaymentMethod::Card);

    html! {
        <section class="checkout-page">
            <form class="checkout-form" onsubmit={on_submit}>
                <h3>{"Datos del huésped"}</h3>
                <div class="form-row">
                    <div class="form-group">
                        <label for="chk-names">{"Nombres"}</label>
                        <input id="chk-names" type="text" value={form.names.clone()} readonly=true />
                    </div>
                    <div class="form-group">
                        <label for="chk-surnames">{"Apellidos"}</label>
                        <input id="chk-surnames" type="text" value={form.surnames.clone()} readonly=true />
                    </div>
                </div>
                <div class="form-group">
                    <label for="chk-email">{"Correo electrónico"}</label>
                    <input id="chk-email" type="email" value={form.email.clone()} readonly=true />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="chk-phone">{"Teléfono *"}</label>
                        <input
                            id="chk-phone"
                            type="tel"
                            value={form.phone.clone()}
                            oninput={text_field(|f, v| f.phone = v)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="chk-mobile">{"Celular"}</label>
                        <input
                            id="chk-mobile"
                            type="tel"
                            value={form.mobile_phone.clone()}
                            oninput={text_field(|f, v| f.mobile_phone = v)}
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="chk-address">{"Dirección *"}</label>
                    <input
                        id="chk-address"
                        type="text"
                        value={form.address.clone()}
                        oninput={text_field(|f, v| f.address = v)}
                    />
                </div>
                <div class="form-group">
                    <label for="chk-address2">{"Dirección (línea 2)"}</label>
                    <input
                        id="chk-address2"
                        type="text"
                        value={form.address2.clone()}
                        oninput={text_field(|f, v| f.address2 = v)}
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="chk-city">{"Ciudad *"}</label>
                        <input
                            id="chk-city"
                            type="text"
                            value={form.city.clone()}
                            oninput={text_field(|f, v| f.city = v)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="chk-zip">{"Código postal *"}</label>
                        <input
                            id="chk-zip"
                            type="text"
                            value={form.postal_code.clone()}
                            oninput={text_field(|f, v| f.postal_code = v)}
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="chk-country">{"País *"}</label>
                    <select id="chk-country" onchange={on_country_change}>
                        <option value="" selected={form.country.is_empty()}>{"Selecciona un país"}</option>
                        {for countries.map(|country| html! {
                            <option value={*country} selected={form.country == *country}>{*country}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="chk-payment-method">{"Método de pago"}</label>
                    <select id="chk-payment-method" onchange={on_payment_change}>
                        {for PaymentMethod::ALL.into_iter().map(|method| html! {
                            <option value={method.code()} selected={method == selected_payment}>
                                {method.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div class={classes!("accordion", requests_open.then_some("open"))}>
                    <button type="button" class="accordion-header" onclick={toggle_requests}>
                        {"Peticiones especiales"}
                        <span class="accordion-icon">{if *requests_open { "−" } else { "+" }}</span>
                    </button>
                    if *requests_open {
                        <textarea
                            id="chk-observations"
                            class="accordion-body"
                            value={form.observations.clone()}
                            oninput={on_observations_input}
                        />
                    }
                </div>

                <div class="checkout-policy">
                    <p class="policy-room">{room_label}</p>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            checked={gate.details_confirmed}
                            onchange={checkbox(|g, v| g.set_details(v))}
                        />
                        {"Confirmo que los datos de la reserva son correctos."}
                    </label>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            checked={gate.conditions_accepted}
                            onchange={checkbox(|g, v| g.set_conditions(v))}
                        />
                        {"Acepto las condiciones de la reserva y la política de cancelación."}
                    </label>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={!gate.can_submit() || *is_submitting}
                >
                    {if *is_submitting { "PROCESSING..." } else { "CONFIRM BOOKING" }}
                </button>
            </form>

            <aside class="booking-cart checkout-cart">
                <h4 class="cart-title">{"Tu reserva"}</h4>
                <div class="cart-row">
                    <span class="cart-label">{"Fechas"}</span>
                    <span class="cart-value">{cart.dates_label.clone().unwrap_or_default()}</span>
                </div>
                <div class="cart-row">
                    <span class="cart-label">{"Huéspedes"}</span>
                    <span class="cart-value">{&cart.guests_label}</span>
                </div>
                <div class="cart-row">
                    <span class="cart-label">{"Habitación"}</span>
                    <span class="cart-value">{cart.room_name.clone().unwrap_or_default()}</span>
                </div>
                <div class="cart-total">
                    <span>{"Total"}</span>
                    <strong>{&cart.total_label}</strong>
                </div>
            </aside>
        </section>
    }
}
