//! Registration section bound to the lead submission controller.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use pro_core::{LeadsConfig, SessionId};
use pro_leads::prelude::*;

use crate::data::{RegistrationContent, REGISTRATION_ANCHOR};
use crate::platform::BrowserPlatform;
use crate::sections::Confetti;

type LandingController = SubmissionController<Box<dyn LeadStore>, BrowserPlatform>;
type StoredController = StoredValue<LandingController, LocalStorage>;

/// How long the confetti stays on screen.
const CELEBRATION_MS: u32 = 5_000;

#[component]
pub fn Registration(config: LeadsConfig) -> impl IntoView {
    let content = RegistrationContent::default();
    let form = RwSignal::new(FormView::default());

    let settings = ControllerSettings::from_config(&config, SessionId::generate());
    let controller: LandingController =
        SubmissionController::new(pro_data::store_from_config(&config), BrowserPlatform, settings)
            .with_observer(move |view| {
                form.try_set(view.clone());
            });
    tracing::debug!(session = %controller.settings().session, "Registration form ready");

    let controller: StoredController = StoredValue::new_local(controller);
    on_cleanup(move || {
        controller.try_with_value(|c| c.dispose());
    });

    Effect::new(move |_| {
        if form.with(|view| view.celebrating) {
            spawn_local(async move {
                TimeoutFuture::new(CELEBRATION_MS).await;
                controller.try_with_value(|c| c.take_celebration());
            });
        }
    });

    let heading = content.heading.clone();
    let pitch = content.pitch.clone();
    let success_body = content.success_body.clone();

    view! {
        <section id=REGISTRATION_ANCHOR class="registration">
            <Confetti active=Signal::derive(move || form.with(|view| view.celebrating))/>
            <div class="container">
                <div class="registration-header">
                    <h2>{heading}</h2>
                    <p>{pitch}</p>
                </div>
                <div class="registration-card">
                    <Show
                        when=move || form.with(|view| view.state.is_success())
                        fallback=move || lead_form(form, controller, &content)
                    >
                        {success_panel(form, controller, &success_body)}
                    </Show>
                </div>
            </div>
        </section>
    }
}

fn lead_form(
    form: RwSignal<FormView>,
    controller: StoredController,
    content: &RegistrationContent,
) -> impl IntoView {
    let edit = move |change: FieldEdit| {
        controller.try_with_value(|c| c.edit(change));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(controller) = controller.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Err(err) = controller.submit_form().await {
                tracing::debug!(error = %err, "Registration not completed");
            }
        });
    };

    let sports = SPORT_SUGGESTIONS
        .iter()
        .map(|sport| view! { <option value=*sport>{*sport}</option> })
        .collect_view();

    view! {
        <form class="registration-form" novalidate=true on:submit=on_submit>
            {move || {
                form.with(|view| view.error_banner().map(str::to_string))
                    .map(|message| view! { <div class="form-error" role="alert">{message}</div> })
            }}

            <div class="form-field">
                <label for="email">
                    {content.email_label.clone()} " " <span class="required">"*"</span>
                </label>
                <input
                    id="email"
                    type="email"
                    placeholder=content.email_placeholder.clone()
                    prop:value=move || form.with(|view| view.values.email.clone())
                    on:input=move |ev| edit(FieldEdit::Email(event_target_value(&ev)))
                />
                {move || {
                    form.with(|view| view.email_error().map(str::to_string))
                        .map(|message| view! { <p class="field-error">{message}</p> })
                }}
            </div>

            <div class="form-field">
                <label for="name">
                    {content.name_label.clone()} " "
                    <span class="optional">{content.optional_hint.clone()}</span>
                </label>
                <input
                    id="name"
                    type="text"
                    placeholder=content.name_placeholder.clone()
                    prop:value=move || form.with(|view| view.values.name.clone().unwrap_or_default())
                    on:input=move |ev| edit(FieldEdit::Name(event_target_value(&ev)))
                />
            </div>

            <div class="form-field">
                <label for="sport">
                    {content.sport_label.clone()} " "
                    <span class="optional">{content.optional_hint.clone()}</span>
                </label>
                <select
                    id="sport"
                    prop:value=move || form.with(|view| view.values.sport.clone().unwrap_or_default())
                    on:change=move |ev| edit(FieldEdit::Sport(event_target_value(&ev)))
                >
                    <option value="" disabled=true>{content.sport_placeholder.clone()}</option>
                    {sports}
                </select>
            </div>

            <div class="form-field form-check">
                <input
                    id="terms"
                    type="checkbox"
                    prop:checked=move || form.with(|view| view.values.accept_terms.unwrap_or(false))
                    on:change=move |ev| edit(FieldEdit::AcceptTerms(event_target_checked(&ev)))
                />
                <label for="terms">{content.terms_label.clone()}</label>
            </div>

            <button
                type="submit"
                class="btn btn-primary btn-block"
                disabled=move || form.with(|view| view.submit_disabled())
            >
                {move || form.with(|view| view.submit_label())}
                {move || {
                    form.with(|view| view.submit_disabled())
                        .then(|| view! { <span class="spinner" aria-hidden="true"></span> })
                }}
            </button>

            <p class="invite-note">{content.invite_note.clone()}</p>
        </form>
    }
}

fn success_panel(
    form: RwSignal<FormView>,
    controller: StoredController,
    body: &str,
) -> impl IntoView {
    let on_share = move |_: MouseEvent| {
        let Some(controller) = controller.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Err(err) = controller.share().await {
                tracing::debug!(error = %err, "Share not completed");
            }
        });
    };

    view! {
        <div class="registration-success">
            <div class="success-icon" aria-hidden="true">"✓"</div>
            <h3>{move || form.with(|view| view.greeting())}</h3>
            <p>{body.to_string()}</p>
            <button type="button" class="btn btn-outline" on:click=on_share>
                {SHARE_LABEL}
            </button>
            <Show when=move || form.with(|view| view.copied)>
                <p class="copied-notice">{COPIED_NOTICE}</p>
            </Show>
        </div>
    }
}
