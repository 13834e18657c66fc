use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const VISIBLE_CLASS: &str = "is-visible";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Wrapper that gains `is-visible` the first time it scrolls into view.
/// The fade/slide itself is a CSS transition on `.reveal`.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    use_effect_with(node.clone(), |node| {
        let observer = node.cast::<Element>().and_then(|element| observe_once(&element));
        move || {
            if let Some((observer, _callback)) = observer {
                observer.disconnect();
            }
        }
    });

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())}>
            {props.children.clone()}
        </div>
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Start observing `element`; it is unobserved after its first intersection.
/// Without IntersectionObserver support the element is revealed right away.
fn observe_once(element: &Element) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    if target.class_list().add_1(VISIBLE_CLASS).is_err() {
                        log::warn!("could not mark element as revealed");
                    }
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.15));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
            let _ = element.class_list().add_1(VISIBLE_CLASS);
            None
        }
    }
}
