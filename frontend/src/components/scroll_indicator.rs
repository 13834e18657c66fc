use booking_shared::SectionTracker;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionIndicatorProps {
    pub tracker: SectionTracker,
}

/// Fixed side track whose thumb slides to the current section, with the
/// section's name next to it
#[function_component(SectionIndicator)]
pub fn section_indicator(props: &SectionIndicatorProps) -> Html {
    let tracker = &props.tracker;
    let thumb_style = format!(
        "height: {:.2}%; top: {:.2}%;",
        tracker.thumb_height_percent(),
        tracker.thumb_offset_percent()
    );

    html! {
        <div
            class={classes!("section-indicator", tracker.is_visible().then_some("visible"))}
            aria-hidden="true"
        >
            <div class="indicator-track">
                <div class="indicator-thumb" style={thumb_style}></div>
            </div>
            <span class="indicator-text">{tracker.active_name().unwrap_or_default()}</span>
        </div>
    }
}
