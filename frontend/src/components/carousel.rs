use yew::prelude::*;

use crate::hooks::use_carousel::use_carousel;

#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub images: Vec<AttrValue>,
    pub alt: AttrValue,
    pub interval_ms: u32,
}

/// Auto-advancing image carousel; a click moves to the next image and
/// restarts the timer
#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let carousel = use_carousel(props.images.len(), props.interval_ms);

    html! {
        <div
            class={classes!("room-custom-carousel", carousel.is_static.then_some("static"))}
            onclick={carousel.advance.clone()}
        >
            {for props.images.iter().enumerate().map(|(index, src)| {
                let active = index == carousel.current;
                html! {
                    <img
                        class={classes!("room-slide", active.then_some("active"))}
                        src={src.clone()}
                        alt={props.alt.clone()}
                        loading="lazy"
                    />
                }
            })}
        </div>
    }
}
