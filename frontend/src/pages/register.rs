use booking_shared::validation::RegisterForm;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::{AppContext, Page};
use crate::services::api::ApiError;
use crate::services::date_utils::now_millis;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct RegisterPageProps {
    pub ctx: AppContext,
}

#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterPageProps) -> Html {
    let ctx = &props.ctx;
    let form = use_state(RegisterForm::default);
    let is_submitting = use_state(|| false);
    let registered = use_state(|| false);

    use_effect_with(*registered, {
        let ctx = ctx.clone();
        let delay = ctx.config.register_redirect_ms;
        move |registered| {
            let redirect = registered.then(|| Timeout::new(delay, move || ctx.go(Page::Booking)));
            move || drop(redirect)
        }
    });

    let text_field = |apply: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let checkbox = |apply: fn(&mut RegisterForm, bool)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.checked());
            form.set(next);
        })
    };

    let on_submit = {
        let ctx = ctx.clone();
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let registered = registered.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.validate(now_millis()) {
                Ok(request) => request,
                Err(e) => {
                    ctx.notifier.error(e.to_string());
                    return;
                }
            };

            is_submitting.set(true);
            let ctx = ctx.clone();
            let is_submitting = is_submitting.clone();
            let registered = registered.clone();

            spawn_local(async move {
                match ctx.api.register(&request).await {
                    Ok(auth) => {
                        Logger::info_with_component("register", &format!("guest {} registered", auth.guest_id));
                        ctx.session.login(&auth);
                        ctx.notifier.info("Tu cuenta ha sido creada correctamente.");
                        registered.set(true);
                    }
                    Err(ApiError::Network(e)) => {
                        Logger::error_with_component("register", &format!("register request failed: {}", e));
                        ctx.notifier.error("Error de conexión. Intenta nuevamente.");
                        is_submitting.set(false);
                    }
                    Err(e) => {
                        Logger::warn_with_component("register", &format!("registration rejected: {}", e));
                        ctx.notifier.error(format!(
                            "Error: {}",
                            e.user_message("no se pudo crear la cuenta")
                        ));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let busy = *is_submitting || *registered;

    html! {
        <section class="register-page">
            <form class="register-form" onsubmit={on_submit}>
                <h2>{"Crear cuenta"}</h2>
                <div class="form-row">
                    <div class="form-group">
                        <label for="reg-firstname">{"Nombres *"}</label>
                        <input
                            id="reg-firstname"
                            type="text"
                            value={form.first_name.clone()}
                            oninput={text_field(|f, v| f.first_name = v)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="reg-lastname">{"Apellidos *"}</label>
                        <input
                            id="reg-lastname"
                            type="text"
                            value={form.last_name.clone()}
                            oninput={text_field(|f, v| f.last_name = v)}
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="reg-phone">{"Teléfono"}</label>
                    <input
                        id="reg-phone"
                        type="tel"
                        value={form.phone.clone()}
                        oninput={text_field(|f, v| f.phone = v)}
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="reg-email">{"Correo electrónico *"}</label>
                        <input
                            id="reg-email"
                            type="email"
                            value={form.email.clone()}
                            oninput={text_field(|f, v| f.email = v)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="reg-confirm-email">{"Confirmar correo *"}</label>
                        <input
                            id="reg-confirm-email"
                            type="email"
                            value={form.confirm_email.clone()}
                            oninput={text_field(|f, v| f.confirm_email = v)}
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="reg-password">{"Contraseña *"}</label>
                        <input
                            id="reg-password"
                            type="password"
                            value={form.password.clone()}
                            oninput={text_field(|f, v| f.password = v)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="reg-confirm-password">{"Confirmar contraseña *"}</label>
                        <input
                            id="reg-confirm-password"
                            type="password"
                            value={form.confirm_password.clone()}
                            oninput={text_field(|f, v| f.confirm_password = v)}
                        />
                    </div>
                </div>
                <label class="checkbox">
                    <input
                        id="chk-privacy"
                        type="checkbox"
                        checked={form.accepted_privacy}
                        onchange={checkbox(|f, v| f.accepted_privacy = v)}
                    />
                    {"He leído y acepto la política de privacidad."}
                </label>
                <label class="checkbox">
                    <input
                        id="chk-create-acc"
                        type="checkbox"
                        checked={form.confirmed_account_creation}
                        onchange={checkbox(|f, v| f.confirmed_account_creation = v)}
                    />
                    {"Quiero crear una cuenta para gestionar mis reservas."}
                </label>
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    {if busy { "CREATING..." } else { "CREATE" }}
                </button>
            </form>
        </section>
    }
}
