use booking_shared::RoomCardView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoomCardProps {
    pub room: RoomCardView,
    pub on_toggle: Callback<RoomCardView>,
}

#[function_component(RoomCard)]
pub fn room_card(props: &RoomCardProps) -> Html {
    let room = &props.room;
    let on_click = {
        let on_toggle = props.on_toggle.clone();
        let room = room.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(room.clone()))
    };

    html! {
        <div class={classes!("room-card", room.selected.then_some("selected"))}>
            if let Some(src) = &room.image_url {
                <img class="room-card-image" src={src.clone()} alt={room.name.clone()} loading="lazy" />
            }
            <div class="room-card-body">
                <h4 class="room-card-title">{&room.name}</h4>
                <span class="room-card-capacity">{&room.capacity_label}</span>
                <ul class="room-card-features">
                    {for room.features.iter().map(|feature| html! { <li>{feature}</li> })}
                </ul>
                <div class="room-card-footer">
                    <span class="room-card-price">
                        {&room.price_label}
                        <small>{" / noche"}</small>
                    </span>
                    <button
                        type="button"
                        class={classes!("btn", if room.selected { "btn-secondary" } else { "btn-primary" })}
                        onclick={on_click}
                    >
                        {room.button_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}
