//! Light/dark theme toggle.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class set on the document root.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    /// The operating system preference, light when unknown.
    pub fn system() -> Self {
        let prefers_dark = web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);

        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Floating button switching the `light`/`dark` class on `<html>`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = RwSignal::new(Theme::system());

    Effect::new(move |_| apply_theme(theme.get()));

    view! {
        <button
            type="button"
            class="theme-toggle"
            on:click=move |_| theme.update(|current| *current = current.toggled())
        >
            <span aria-hidden="true">{move || theme.get().icon()}</span>
            <span class="sr-only">"Cambiar tema"</span>
        </button>
    }
}

fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let applied = classes
        .remove_1(theme.toggled().class())
        .and_then(|_| classes.add_1(theme.class()));
    if let Err(err) = applied {
        tracing::warn!(error = ?err, "Could not apply theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_roundtrip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_classes() {
        assert_eq!(Theme::Dark.class(), "dark");
        assert_eq!(Theme::default().class(), "light");
    }
}
