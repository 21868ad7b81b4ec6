//! PRO Manizales landing page.
//!
//! Single-page client-rendered site:
//! - Countdown banner to the public launch
//! - Hero, features, challenge, solution and local-focus sections
//! - Registration form bound to the lead submission controller
//! - Footer with an inert language selector and a theme toggle

mod app;
mod config;
mod data;
mod platform;
mod sections;

pub use app::App;
pub use config::site_config;
pub use platform::BrowserPlatform;

/// Install logging and the panic hook, then render into `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    pro_observability::init_browser(config::log_level());

    let config = site_config();
    leptos::mount::mount_to_body(move || leptos::view! { <App config=config/> });
}
