use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::context::{AppContext, Page};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub ctx: AppContext,
}

struct Feature {
    title: &'static str,
    kanji: &'static str,
    text: &'static str,
    image: &'static str,
    page: Page,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Habitaciones",
        kanji: "部屋",
        text: "Espacios de madera y papel washi pensados para el descanso, con vistas al jardín.",
        image: "/images/features/rooms.jpg",
        page: Page::Rooms,
    },
    Feature {
        title: "Instalaciones",
        kanji: "温泉",
        text: "Baños termales, spa y un jardín que cambia con cada estación.",
        image: "/images/features/onsen.jpg",
        page: Page::Facilities,
    },
    Feature {
        title: "Reservas",
        kanji: "予約",
        text: "Elige tus fechas, el número de huéspedes y la habitación que mejor te encaje.",
        image: "/images/features/booking.jpg",
        page: Page::Booking,
    },
];

/// Landing page: the intro columns followed by one block per service, each
/// revealed as it scrolls into view
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let ctx = &props.ctx;
    let go = |page: Page| {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.go(page))
    };

    html! {
        <section class="home-page">
            <Reveal class="intro-section">
                <div class="intro-left">
                    <h1 class="intro-title">{"Un refugio entre montañas"}</h1>
                    <p class="intro-text">
                        {"Hospitalidad tradicional, cocina de temporada y aguas termales a pocos pasos de tu habitación."}
                    </p>
                    <button type="button" class="btn btn-primary" onclick={go(Page::Booking)}>
                        {"RESERVAR"}
                    </button>
                </div>
                <div class="intro-right">
                    <img src="/images/intro.jpg" alt="Vista del hotel" loading="lazy" />
                </div>
            </Reveal>

            <div class="feature-blocks">
                {for FEATURES.iter().map(|feature| html! {
                    <Reveal key={feature.title} class="feature-block">
                        <img class="feature-main-img" src={feature.image} alt={feature.title} loading="lazy" />
                        <span class="feature-jp-img" aria-hidden="true">{feature.kanji}</span>
                        <div class="feature-text">
                            <h3 class="feature-title">{feature.title}</h3>
                            <p>{feature.text}</p>
                            <button type="button" class="btn btn-outline" onclick={go(feature.page)}>
                                {"DESCUBRIR"}
                            </button>
                        </div>
                    </Reveal>
                })}
            </div>
        </section>
    }
}
