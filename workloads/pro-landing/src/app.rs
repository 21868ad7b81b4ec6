//! Application root.

use leptos::prelude::*;
use leptos_meta::*;
use pro_core::SiteConfig;

use crate::data::StoryContent;
use crate::sections::{
    CountdownBanner, Features, Footer, Hero, LocalFocus, Registration, Story, ThemeToggle,
};

/// Open Graph picture.
const SHARE_IMAGE: &str = "/assets/sportsman-sitting-grass-holding-football-dusk.jpg";

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let site = config.site;

    view! {
        <Title text=site.title.clone()/>
        <Meta name="description" content=site.description.clone()/>
        <Meta name="keywords" content="deportes manizales, atletas manizales, eventos deportivos, fútbol manizales, baloncesto manizales, deportes caldas, comunidad deportiva"/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:locale" content="es_CO"/>
        <Meta property="og:url" content=site.url.clone()/>
        <Meta property="og:site_name" content=site.name.clone()/>
        <Meta property="og:title" content=site.title.clone()/>
        <Meta property="og:description" content=site.description.clone()/>
        <Meta property="og:image" content=SHARE_IMAGE/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Link rel="canonical" href=site.url.clone()/>

        <main class="page">
            <CountdownBanner launch_at=site.launch_at/>
            <Hero/>
            <Features/>
            <Story content=StoryContent::challenge()/>
            <Story content=StoryContent::solution() reverse=true/>
            <LocalFocus/>
            <Registration config=config.leads/>
            <Footer/>
            <ThemeToggle/>
        </main>
    }
}
