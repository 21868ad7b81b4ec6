//! Launch countdown banner.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};
use leptos::prelude::*;
use pro_core::{pad2, TimeLeft};

use crate::data::{BannerContent, REGISTRATION_ANCHOR};

/// Sticky banner counting down to `launch_at`, refreshed every second.
#[component]
pub fn CountdownBanner(launch_at: DateTime<FixedOffset>) -> impl IntoView {
    let content = BannerContent::default();
    let now = RwSignal::new(Utc::now());

    match set_interval_with_handle(move || now.set(Utc::now()), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => tracing::warn!(error = ?err, "Countdown timer unavailable"),
    }

    let left = Memo::new(move |_| TimeLeft::until(&launch_at, now.get()));

    view! {
        <div class="countdown-banner">
            <span class="countdown-label">{content.label}</span>
            <div class="countdown-units">
                {move || {
                    left.get()
                        .units()
                        .into_iter()
                        .map(|(value, label)| view! {
                            <div class="countdown-unit">
                                <span class="countdown-value">{pad2(value)}</span>
                                <span class="countdown-caption">{label}</span>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
            <a class="countdown-cta" href=format!("#{}", REGISTRATION_ANCHOR)>
                {content.cta_text}
            </a>
        </div>
    }
}
