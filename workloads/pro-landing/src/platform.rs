//! Browser implementation of the controller's platform services.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use pro_leads::{ClipboardError, Platform};
use wasm_bindgen_futures::JsFuture;

/// Clipboard, location and timers from `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

#[async_trait(?Send)]
impl Platform for BrowserPlatform {
    fn page_url(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().href().ok())
            .unwrap_or_default()
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);

        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::WriteFailed(format!("{:?}", err)))
    }

    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
