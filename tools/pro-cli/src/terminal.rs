//! Terminal implementation of the controller's platform services.

use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures::future::LocalBoxFuture;
use pro_leads::{ClipboardError, Platform};

/// Clipboard through the OSC 52 escape, timers from tokio.
///
/// Reset timers are spawned with `tokio::task::spawn_local`, so the
/// controller must be driven inside a `LocalSet`.
pub struct TerminalPlatform {
    page_url: String,
}

impl TerminalPlatform {
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl Platform for TerminalPlatform {
    fn page_url(&self) -> String {
        self.page_url.clone()
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        if !console::Term::stdout().is_term() {
            return Err(ClipboardError::Unavailable);
        }

        let mut stdout = std::io::stdout();
        stdout
            .write_all(osc52(text).as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }
}

/// Escape sequence asking the terminal to put `text` on the clipboard.
pub fn osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(
            osc52("https://promanizales.com"),
            "\x1b]52;c;aHR0cHM6Ly9wcm9tYW5pemFsZXMuY29t\x07"
        );
    }

    #[test]
    fn test_page_url() {
        let platform = TerminalPlatform::new("https://promanizales.com");
        assert_eq!(platform.page_url(), "https://promanizales.com");
    }
}
