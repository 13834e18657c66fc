use booking_shared::validation::ProfileForm;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::{reload_page, AppContext, Page};
use crate::services::api::ApiError;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub ctx: AppContext,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let ctx = &props.ctx;
    let form = use_state(ProfileForm::default);
    let is_submitting = use_state(|| false);
    let updated = use_state(|| false);

    // Without a session there is nothing to edit
    use_effect_with(ctx.session.guest_id(), {
        let ctx = ctx.clone();
        let form = form.clone();
        move |guest_id| {
            match *guest_id {
                None => ctx.go(Page::Booking),
                Some(guest_id) => spawn_local(async move {
                    match ctx.api.get_guest(guest_id).await {
                        Ok(profile) => {
                            let email = profile.email.clone().unwrap_or_default();
                            form.set(ProfileForm {
                                first_name: profile.names.unwrap_or_default(),
                                last_name: profile.surnames.unwrap_or_default(),
                                phone: profile.phone.unwrap_or_default(),
                                confirm_email: email.clone(),
                                email,
                                ..ProfileForm::default()
                            });
                        }
                        Err(ApiError::Network(e)) => {
                            Logger::error_with_component("profile", &format!("profile request failed: {}", e));
                            ctx.notifier.error("Error de conexión al cargar el perfil.");
                        }
                        Err(e) => {
                            Logger::warn_with_component("profile", &format!("profile not loaded: {}", e));
                            ctx.notifier.error("No pudimos cargar tus datos de perfil.");
                        }
                    }
                }),
            }
            || ()
        }
    });

    use_effect_with(*updated, {
        let delay = ctx.config.profile_reload_ms;
        move |updated| {
            let reload = updated.then(|| Timeout::new(delay, reload_page));
            move || drop(reload)
        }
    });

    let text_field = |apply: fn(&mut ProfileForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_privacy_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ProfileForm {
                accepted_privacy: input.checked(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let ctx = ctx.clone();
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let updated = updated.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(guest_id) = ctx.session.guest_id() else {
                return;
            };
            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    ctx.notifier.error(e.to_string());
                    return;
                }
            };

            is_submitting.set(true);
            let ctx = ctx.clone();
            let is_submitting = is_submitting.clone();
            let updated = updated.clone();

            spawn_local(async move {
                match ctx.api.update_guest(guest_id, &request).await {
                    Ok(()) => {
                        Logger::info_with_component("profile", &format!("guest {} updated", guest_id));
                        ctx.session.rename(&request.names, &request.surnames);
                        ctx.notifier.info("¡Tu perfil ha sido actualizado correctamente!");
                        updated.set(true);
                    }
                    Err(ApiError::Network(e)) => {
                        Logger::error_with_component("profile", &format!("update request failed: {}", e));
                        ctx.notifier.error("Error de conexión con el servidor.");
                    }
                    Err(e) => {
                        Logger::warn_with_component("profile", &format!("update rejected: {}", e));
                        ctx.notifier.error(format!(
                            "Error: {}",
                            e.user_message("no se pudo actualizar el perfil")
                        ));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <section class="profile-page">
            <form class="profile-form" onsubmit={on_submit}>
                <h2>{"Mi perfil"}</h2>
                <div class="form-row">
                    <div class="form-group">
                        <label for="pro-firstname">{"Nombres *"}</label>
                        <input
                            id="pro-firstname"
                            type="text"
                            value={form.first_name.clone()}
                            oninput={text_field(|f, v| f.first_name = v)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="pro-lastname">{"Apellidos *"}</label>
                        <input
                            id="pro-lastname"
                            type="text"
                            value={form.last_name.clone()}
                            oninput={text_field(|f, v| f.last_name = v)}
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="pro-phone">{"Teléfono"}</label>
                    <input
                        id="pro-phone"
                        type="tel"
                        value={form.phone.clone()}
                        oninput={text_field(|f, v| f.phone = v)}
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="pro-email">{"Correo electrónico *"}</label>
                        <input
                            id="pro-email"
                            type="email"
                            value={form.email.clone()}
                            oninput={text_field(|f, v| f.email = v)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="pro-confirm-email">{"Confirmar correo *"}</label>
                        <input
                            id="pro-confirm-email"
                            type="email"
                            value={form.confirm_email.clone()}
                            oninput={text_field(|f, v| f.confirm_email = v)}
                        />
                    </div>
                </div>
                <p class="form-hint">{"Deja la contraseña en blanco para conservar la actual."}</p>
                <div class="form-row">
                    <div class="form-group">
                        <label for="pro-password">{"Nueva contraseña"}</label>
                        <input
                            id="pro-password"
                            type="password"
                            value={form.password.clone()}
                            oninput={text_field(|f, v| f.password = v)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="pro-confirm-password">{"Confirmar contraseña"}</label>
                        <input
                            id="pro-confirm-password"
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
                        onchange={on_privacy_change}
                    />
                    {"Acepto la política de privacidad."}
                </label>
                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    {if *is_submitting { "UPDATING..." } else { "UPDATE" }}
                </button>
            </form>
        </section>
    }
}
