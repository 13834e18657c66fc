use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Extra class for the dialog box, e.g. `login-modal`
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Backdrop plus dialog box. Clicking the backdrop closes the modal, clicks
/// inside the box do not.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class={classes!("modal", props.class.clone())} onclick={on_modal_click}>
                <button type="button" class="modal-close" aria-label="Cerrar" onclick={on_close_click}>
                    {"×"}
                </button>
                if let Some(title) = &props.title {
                    <h3 class="modal-title">{title.clone()}</h3>
                }
                <div class="modal-content">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
