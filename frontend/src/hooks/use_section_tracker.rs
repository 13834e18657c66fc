use std::rc::Rc;

use booking_shared::SectionTracker;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Elements the tracker watches inside its container
pub const SECTION_SELECTOR: &str = ".fac-section";
/// Attribute carrying a section's position in the tracker
pub const SECTION_INDEX_ATTR: &str = "data-section";

/// Shrinks the viewport to its horizontal centre line
const CENTRE_LINE_MARGIN: &str = "-50% 0px -50% 0px";

enum SectionAction {
    Enter(usize),
    Leave(usize),
}

#[derive(Debug, Clone, PartialEq)]
struct SectionState {
    tracker: SectionTracker,
}

impl Reducible for SectionState {
    type Action = SectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut tracker = self.tracker.clone();
        let changed = match action {
            SectionAction::Enter(index) => tracker.enter(index),
            SectionAction::Leave(index) => tracker.leave(index),
        };
        if changed {
            Rc::new(Self { tracker })
        } else {
            self
        }
    }
}

pub struct UseSectionTrackerResult {
    /// Attach to the element wrapping the tracked sections
    pub container: NodeRef,
    pub tracker: SectionTracker,
}

/// Follows which `.fac-section` inside `container` crosses the viewport
/// centre. Each section carries its index in `data-section`.
#[hook]
pub fn use_section_tracker(names: Vec<String>) -> UseSectionTrackerResult {
    let container = use_node_ref();
    let count = names.len();
    let state = use_reducer(move || SectionState {
        tracker: SectionTracker::new(names),
    });

    use_effect_with((container.clone(), count), {
        let dispatcher = state.dispatcher();
        move |(container, _)| {
            let observer = container
                .cast::<Element>()
                .and_then(|element| observe_sections(&element, dispatcher));
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        }
    });

    UseSectionTrackerResult {
        container,
        tracker: state.tracker.clone(),
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn section_index(element: &Element) -> Option<usize> {
    element.get_attribute(SECTION_INDEX_ATTR)?.parse().ok()
}

fn observe_sections(
    container: &Element,
    dispatcher: UseReducerDispatcher<SectionState>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let Some(index) = section_index(&entry.target()) else {
                    continue;
                };
                if entry.is_intersecting() {
                    dispatcher.dispatch(SectionAction::Enter(index));
                } else {
                    dispatcher.dispatch(SectionAction::Leave(index));
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(CENTRE_LINE_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable, section indicator disabled: {:?}", e);
                return None;
            }
        };

    let sections = match container.query_selector_all(SECTION_SELECTOR) {
        Ok(sections) => sections,
        Err(e) => {
            log::warn!("could not list sections: {:?}", e);
            return None;
        }
    };
    for i in 0..sections.length() {
        if let Some(section) = sections.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&section);
        }
    }
    Some((observer, callback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn state() -> Rc<SectionState> {
        Rc::new(SectionState {
            tracker: SectionTracker::new(vec!["Onsen".to_string(), "Spa".to_string()]),
        })
    }

    #[wasm_bindgen_test]
    fn test_enter_and_leave_update_tracker() {
        let state = state().reduce(SectionAction::Enter(1));
        assert!(state.tracker.is_visible());
        assert_eq!(state.tracker.active_name(), Some("Spa"));

        let state = state.reduce(SectionAction::Leave(1));
        assert!(!state.tracker.is_visible());
    }

    #[wasm_bindgen_test]
    fn test_unchanged_tracker_keeps_state() {
        let initial = state();
        let same = initial.clone().reduce(SectionAction::Leave(0));
        assert!(Rc::ptr_eq(&initial, &same));
    }

    #[wasm_bindgen_test]
    fn test_section_index_from_attribute() {
        let document = web_sys::window().unwrap().document().unwrap();
        let section = document.create_element("section").unwrap();
        assert_eq!(section_index(&section), None);
        section.set_attribute(SECTION_INDEX_ATTR, "2").unwrap();
        assert_eq!(section_index(&section), Some(2));
    }
}
