//! Features section.

use leptos::prelude::*;

use crate::data::FeaturesContent;

#[component]
pub fn Features() -> impl IntoView {
    let content = FeaturesContent::default();

    let cards = content
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            view! {
                <div class="feature-card" data-index=index.to_string()>
                    <span class="feature-icon">{feature.icon}</span>
                    <h3 class="feature-title">{feature.title}</h3>
                    <p class="feature-description">{feature.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="features">
            <div class="section-header">
                <h2>{content.section_title}</h2>
                <p>{content.section_subtitle}</p>
            </div>
            <div class="features-grid">{cards}</div>
        </section>
    }
}
