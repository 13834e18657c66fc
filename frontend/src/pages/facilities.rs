use booking_shared::{Season, SeasonTabs};
use yew::prelude::*;

use crate::components::carousel::ImageCarousel;
use crate::components::reveal::Reveal;
use crate::components::scroll_indicator::SectionIndicator;
use crate::context::{AppContext, Page};
use crate::hooks::use_section_tracker::use_section_tracker;

#[derive(Properties, PartialEq)]
pub struct FacilitiesPageProps {
    pub ctx: AppContext,
}

struct Facility {
    name: &'static str,
    text: &'static str,
    images: &'static [&'static str],
}

const FACILITIES: [Facility; 4] = [
    Facility {
        name: "Onsen",
        text: "Baños termales interiores y al aire libre, abiertos desde el amanecer hasta la medianoche.",
        images: &["/images/facilities/onsen-1.jpg", "/images/facilities/onsen-2.jpg"],
    },
    Facility {
        name: "Restaurante",
        text: "Cocina kaiseki con productos locales que cambian con cada estación.",
        images: &["/images/facilities/restaurant-1.jpg", "/images/facilities/restaurant-2.jpg"],
    },
    Facility {
        name: "Spa",
        text: "Tratamientos y masajes inspirados en la tradición japonesa.",
        images: &["/images/facilities/spa-1.jpg", "/images/facilities/spa-2.jpg"],
    },
    Facility {
        name: "Jardín",
        text: "Un paseo entre arces, musgo y piedra para terminar el día.",
        images: &["/images/facilities/garden-1.jpg"],
    },
];

type Menu = &'static [(&'static str, &'static [&'static str])];

const SPRING_MENU: Menu = &[
    ("Entrantes", &["Tofu de sésamo con brotes de bambú", "Sashimi de besugo"]),
    ("Principales", &["Arroz con guisantes y sakura", "Pescado a la sal con hojas de kinome"]),
];
const SUMMER_MENU: Menu = &[
    ("Entrantes", &["Fideos somen fríos", "Berenjena asada con miso"]),
    ("Principales", &["Anguila a la parrilla", "Tempura de verduras de verano"]),
];
const AUTUMN_MENU: Menu = &[
    ("Entrantes", &["Setas matsutake al vapor", "Castañas glaseadas"]),
    ("Principales", &["Paparda a la brasa", "Arroz con setas de temporada"]),
];
const WINTER_MENU: Menu = &[
    ("Entrantes", &["Rábano daikon guisado", "Ostras con ponzu"]),
    ("Principales", &["Nabe de pescado", "Cangrejo de invierno al vapor"]),
];

/// Courses and their dishes for one season
fn season_menu(season: Season) -> Menu {
    match season {
        Season::Spring => SPRING_MENU,
        Season::Summer => SUMMER_MENU,
        Season::Autumn => AUTUMN_MENU,
        Season::Winter => WINTER_MENU,
    }
}

#[function_component(FacilitiesPage)]
pub fn facilities_page(props: &FacilitiesPageProps) -> Html {
    let ctx = &props.ctx;
    let sections = use_section_tracker(FACILITIES.iter().map(|f| f.name.to_string()).collect());
    let tabs = use_state(SeasonTabs::default);

    let on_tab = |season: Season| {
        let tabs = tabs.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *tabs;
            if next.select(season) {
                tabs.set(next);
            }
        })
    };

    let on_book = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.go(Page::Booking))
    };

    html! {
        <section class="facilities-page">
            <Reveal class="fac-intro">
                <div class="fac-intro-left">
                    <span class="fac-kanji" aria-hidden="true">{"施設"}</span>
                    <h2>{"Instalaciones"}</h2>
                </div>
                <div class="fac-intro-right">
                    <p>
                        {"Todo lo necesario para desconectar: agua termal, buena mesa y tiempo para uno mismo."}
                    </p>
                </div>
            </Reveal>

            <div class="fac-sections" ref={sections.container.clone()}>
                {for FACILITIES.iter().enumerate().map(|(index, facility)| {
                    let images: Vec<AttrValue> =
                        facility.images.iter().map(|src| AttrValue::from(*src)).collect();
                    html! {
                        <section
                            key={facility.name}
                            class="fac-section"
                            data-section={index.to_string()}
                        >
                            <ImageCarousel
                                {images}
                                alt={facility.name}
                                interval_ms={ctx.config.carousel_interval_ms}
                            />
                            <Reveal class="fac-section-text">
                                <h3 class="fac-section-title">{facility.name}</h3>
                                <div class="fac-divider"></div>
                                <p>{facility.text}</p>
                            </Reveal>
                        </section>
                    }
                })}
            </div>

            <SectionIndicator tracker={sections.tracker.clone()} />

            <section class="seasonal-menus-section">
                <h2>{"Menús de temporada"}</h2>
                <div class="season-tabs" role="tablist">
                    {for Season::ALL.into_iter().map(|season| html! {
                        <button
                            type="button"
                            role="tab"
                            class={classes!("season-tab", tabs.is_active(season).then_some("active"))}
                            aria-controls={season.id()}
                            onclick={on_tab(season)}
                        >
                            {season.label()}
                        </button>
                    })}
                </div>
                {for Season::ALL.into_iter().map(|season| html! {
                    <div
                        id={season.id()}
                        class={classes!("season-content", tabs.is_active(season).then_some("active"))}
                    >
                        {for season_menu(season).iter().map(|(course, dishes)| html! {
                            <Reveal class="menu-group">
                                <h4 class="menu-course">{*course}</h4>
                                <ul>
                                    {for dishes.iter().map(|dish| html! { <li>{*dish}</li> })}
                                </ul>
                            </Reveal>
                        })}
                    </div>
                })}
                <button type="button" class="btn btn-primary" onclick={on_book}>{"RESERVAR"}</button>
            </section>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_section_tracker::SECTION_INDEX_ATTR;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_every_season_has_a_menu() {
        for season in Season::ALL {
            let menu = season_menu(season);
            assert!(!menu.is_empty());
            assert!(menu.iter().all(|(_, dishes)| !dishes.is_empty()));
        }
    }

    #[wasm_bindgen_test]
    fn test_sections_are_indexed_in_order() {
        assert_eq!(SECTION_INDEX_ATTR, "data-section");
        let names: Vec<&str> = FACILITIES.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Onsen", "Restaurante", "Spa", "Jardín"]);
        assert!(FACILITIES.iter().all(|f| !f.images.is_empty()));
    }
}
