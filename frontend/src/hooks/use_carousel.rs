use std::rc::Rc;

use booking_shared::Carousel;
use gloo::timers::callback::Interval;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct CarouselState {
    carousel: Carousel,
    /// Bumped on manual clicks so the auto-advance timer starts over
    restarts: u32,
}

enum CarouselAction {
    Tick,
    Click,
    /// The slide list changed
    Resize(usize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.carousel;
        let restarts = match action {
            CarouselAction::Tick => {
                carousel.next();
                self.restarts
            }
            CarouselAction::Click => {
                carousel.next();
                self.restarts.wrapping_add(1)
            }
            CarouselAction::Resize(len) => {
                if !carousel.resize(len) {
                    return self;
                }
                self.restarts.wrapping_add(1)
            }
        };
        Rc::new(Self { carousel, restarts })
    }
}

pub struct UseCarouselResult {
    pub current: usize,
    pub is_static: bool,
    pub advance: Callback<MouseEvent>,
}

/// Auto-advancing slide index. Static carousels (one slide or none) never
/// start a timer and ignore clicks.
#[hook]
pub fn use_carousel(len: usize, interval_ms: u32) -> UseCarouselResult {
    let state = use_reducer(move || CarouselState {
        carousel: Carousel::new(len),
        restarts: 0,
    });
    let is_static = state.carousel.is_static();

    use_effect_with(len, {
        let state = state.clone();
        move |len| {
            state.dispatch(CarouselAction::Resize(*len));
            || ()
        }
    });

    use_effect_with((state.restarts, is_static), {
        let state = state.clone();
        move |(_, is_static)| {
            let interval = (!*is_static).then(|| {
                Interval::new(interval_ms, move || state.dispatch(CarouselAction::Tick))
            });
            move || drop(interval)
        }
    });

    let advance = {
        let state = state.clone();
        use_callback(is_static, move |_: MouseEvent, is_static| {
            if !*is_static {
                state.dispatch(CarouselAction::Click);
            }
        })
    };

    UseCarouselResult {
        current: state.carousel.current(),
        is_static,
        advance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_new_slide_list_replaces_count() {
        let state = Rc::new(CarouselState {
            carousel: Carousel::new(1),
            restarts: 0,
        });
        let state = state.reduce(CarouselAction::Resize(3));
        assert!(!state.carousel.is_static());
        assert_eq!(state.restarts, 1);

        let state = state.reduce(CarouselAction::Tick);
        assert_eq!(state.carousel.current(), 1);

        let same = state.clone().reduce(CarouselAction::Resize(3));
        assert!(Rc::ptr_eq(&same, &state));
    }
}
