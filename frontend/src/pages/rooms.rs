use std::rc::Rc;

use booking_shared::{format_price, RoomType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::carousel::ImageCarousel;
use crate::components::reveal::Reveal;
use crate::context::{AppContext, Page};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct RoomsPageProps {
    pub ctx: AppContext,
}

/// Showcase of every room type, independent of dates or guests
#[function_component(RoomsPage)]
pub fn rooms_page(props: &RoomsPageProps) -> Html {
    let ctx = &props.ctx;
    let rooms = use_state(|| None::<Rc<Vec<RoomType>>>);

    use_effect_with((), {
        let ctx = ctx.clone();
        let rooms = rooms.clone();
        move |_| {
            spawn_local(async move {
                match ctx.api.get_room_types().await {
                    Ok(list) => {
                        Logger::debug_with_component("rooms", &format!("{} room types", list.len()));
                        rooms.set(Some(Rc::new(list)));
                    }
                    Err(e) => {
                        Logger::error_with_component("rooms", &format!("room types not loaded: {}", e));
                        ctx.notifier.error(e.user_message("No pudimos cargar las habitaciones."));
                        rooms.set(Some(Rc::new(Vec::new())));
                    }
                }
            });
            || ()
        }
    });

    let on_book = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.go(Page::Booking))
    };

    let content = match &*rooms {
        None => html! { <p class="rooms-loading">{"Cargando habitaciones..."}</p> },
        Some(list) if list.is_empty() => html! {
            <p class="rooms-empty">{"No hay habitaciones para mostrar en este momento."}</p>
        },
        Some(list) => html! {
            <>
            {for list.iter().map(|room| {
                let images: Vec<AttrValue> = room
                    .image_urls()
                    .into_iter()
                    .map(|url| AttrValue::from(url.to_string()))
                    .collect();
                html! {
                    <Reveal key={room.id_tipo} class="room-dynamic-layout">
                        <div class="room-images-side">
                            <ImageCarousel
                                {images}
                                alt={room.name_type.clone()}
                                interval_ms={ctx.config.carousel_interval_ms}
                            />
                        </div>
                        <div class="room-info-side info-text-reveal">
                            <h3 class="room-nametype">{&room.name_type}</h3>
                            <p class="room-capacity">{format!("Hasta {} personas", room.capacity_people)}</p>
                            <ul class="room-features">
                                {for room.features().into_iter().map(|feature| html! { <li>{feature}</li> })}
                            </ul>
                            <p class="room-price">
                                {"Desde "}<strong>{format_price(room.base_price)}</strong>{" / noche"}
                            </p>
                            <button type="button" class="btn btn-outline" onclick={on_book.clone()}>
                                {"RESERVAR"}
                            </button>
                        </div>
                    </Reveal>
                }
            })}
            </>
        },
    };

    html! {
        <section class="rooms-page">
            <h2 class="rooms-title">{"Nuestras habitaciones"}</h2>
            {content}
        </section>
    }
}
