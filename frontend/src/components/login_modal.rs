use booking_shared::validation::LoginForm;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::context::{AppContext, Page};
use crate::hooks::use_modal::ModalKind;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub ctx: AppContext,
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let ctx = &props.ctx;
    let is_open = ctx.modals.is_open(ModalKind::Login);
    let form = use_state(LoginForm::default);
    let is_submitting = use_state(|| false);

    // Reset state when modal opens
    use_effect_with(is_open, {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        move |is_open| {
            if *is_open {
                form.set(LoginForm::default());
                is_submitting.set(false);
            }
            || ()
        }
    });

    let on_email_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let ctx = ctx.clone();
        let form = form.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

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

            spawn_local(async move {
                match ctx.api.login(&request).await {
                    Ok(auth) => {
                        Logger::info_with_component("login-modal", &format!("guest {} logged in", auth.guest_id));
                        ctx.session.login(&auth);
                        ctx.notifier.info(format!("¡Bienvenido, {}!", auth.guest_name));
                        ctx.modals.close();
                    }
                    Err(e) => {
                        Logger::warn_with_component("login-modal", &format!("login failed: {}", e));
                        ctx.notifier.error(e.user_message("Correo o contraseña incorrectos."));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_register_click = {
        let ctx = ctx.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ctx.modals.close();
            ctx.go(Page::Register);
        })
    };

    html! {
        <Modal
            is_open={is_open}
            on_close={ctx.modals.close_callback()}
            class="login-modal"
            title="Iniciar sesión"
        >
            <form class="login-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="login-email">{"Correo electrónico"}</label>
                    <input
                        id="login-email"
                        type="email"
                        value={form.email.clone()}
                        onchange={on_email_change}
                        disabled={*is_submitting}
                        autofocus=true
                    />
                </div>
                <div class="form-group">
                    <label for="login-password">{"Contraseña"}</label>
                    <input
                        id="login-password"
                        type="password"
                        value={form.password.clone()}
                        onchange={on_password_change}
                        disabled={*is_submitting}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    {if *is_submitting { "ENTRANDO..." } else { "ENTRAR" }}
                </button>
            </form>
            <p class="login-register">
                {"¿No tienes cuenta? "}
                <a href={Page::Register.hash()} onclick={on_register_click}>{"Crear cuenta"}</a>
            </p>
        </Modal>
    }
}
