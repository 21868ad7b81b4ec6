//! Footer with the language selector.

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::data::FooterContent;

/// Page footer.
///
/// The language selector only records the choice; the page stays in Spanish.
#[component]
pub fn Footer() -> impl IntoView {
    let content = FooterContent::default();
    let copyright = content.copyright(Utc::now().year());
    let language = RwSignal::new(
        content
            .languages
            .first()
            .map(|lang| lang.code.clone())
            .unwrap_or_default(),
    );

    let options = content
        .languages
        .into_iter()
        .map(|lang| view! { <option value=lang.code>{lang.label}</option> })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="footer-brand">
                <img src="/assets/LOGO.png" alt=content.brand width="100" height="100"/>
                <p>{copyright}</p>
            </div>
            <select
                class="language-select"
                aria-label="Idioma"
                prop:value=move || language.get()
                on:change=move |ev| {
                    let code = event_target_value(&ev);
                    tracing::debug!(language = %code, "Language selected");
                    language.set(code);
                }
            >
                {options}
            </select>
            <p class="footer-signature">{content.signature}</p>
        </footer>
    }
}
