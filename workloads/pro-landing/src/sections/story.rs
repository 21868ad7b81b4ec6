//! Text-and-picture sections (the challenge and the solution).

use leptos::prelude::*;

use crate::data::StoryContent;

#[component]
pub fn Story(
    content: StoryContent,
    /// Put the picture on the left.
    #[prop(optional)]
    reverse: bool,
) -> impl IntoView {
    let class = if reverse { "story story-reverse" } else { "story" };

    let highlights = content
        .highlights
        .into_iter()
        .map(|item| {
            let title = (!item.title.is_empty()).then(|| view! { <h3>{item.title}</h3> });
            view! {
                <div class="story-highlight">
                    <span class="story-icon">{item.icon}</span>
                    {title}
                    <p>{item.text}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class=class>
            <div class="story-image">
                <img src=content.image alt=content.image_alt/>
            </div>
            <div class="story-text">
                <h2>{content.title}</h2>
                <p>{content.body}</p>
                <div class="story-highlights">{highlights}</div>
            </div>
        </section>
    }
}
