//! Hero section.

use leptos::prelude::*;

use crate::data::{HeroContent, REGISTRATION_ANCHOR};

#[component]
pub fn Hero() -> impl IntoView {
    let content = HeroContent::default();

    view! {
        <section class="hero">
            <div class="hero-media">
                <video
                    class="hero-video"
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    preload="auto"
                >
                    <source src=content.video type="video/mp4"/>
                    "Tu navegador no soporta videos HTML5."
                </video>
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <img class="hero-logo" src=content.logo alt="PRO Manizales" width="350" height="350"/>
                <h1>{content.headline}</h1>
                <p class="hero-subheadline">{content.subheadline}</p>
                <a href=format!("#{}", REGISTRATION_ANCHOR) class="btn btn-primary btn-lg">
                    <span class="hero-cta-icon">"🚀"</span>
                    {content.cta_text}
                </a>
                <p class="hero-note">{content.note}</p>
            </div>
        </section>
    }
}
