//! Local focus section with the city map.

use leptos::prelude::*;

use crate::data::LocalFocusContent;

#[component]
pub fn LocalFocus() -> impl IntoView {
    let content = LocalFocusContent::default();

    let images = content
        .images
        .into_iter()
        .map(|src| view! { <div class="local-image"><img src=src alt=""/></div> })
        .collect_view();
    let labels = content
        .map_labels
        .into_iter()
        .map(|label| view! { <span class="map-label">{label}</span> })
        .collect_view();

    view! {
        <section class="local-focus">
            <div class="local-text">
                <h2>{content.title}</h2>
                <p>{content.body}</p>
                <div class="local-images">{images}</div>
            </div>
            <div class="city-map">
                <iframe
                    src=content.map_embed
                    width="100%"
                    height="100%"
                    style="border: 0"
                    allowfullscreen=true
                    {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                    referrerpolicy="no-referrer-when-downgrade"
                ></iframe>
                <div class="map-labels">{labels}</div>
            </div>
        </section>
    }
}
