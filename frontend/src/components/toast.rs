use yew::prelude::*;

use crate::hooks::use_toast::{Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    let Some(toast) = &props.toast else {
        return html! {};
    };

    let kind_class = match toast.kind {
        ToastKind::Info => "toast-info",
        ToastKind::Error => "toast-error",
    };
    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("toast", "show", kind_class)} role="status" onclick={on_click}>
            <span class="toast-message">{&toast.message}</span>
        </div>
    }
}
