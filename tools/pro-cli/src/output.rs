//! Terminal output for the CLI.
//!
//! Human messages are suppressed with `--json`; only command results and
//! errors are printed then.

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Output handler shared by every command.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn emit(&self, stream: Stream, marker: StyledObject<&str>, msg: impl std::fmt::Display) {
        if self.json {
            return;
        }
        match stream {
            Stream::Stdout => println!("{} {}", marker, msg),
            Stream::Stderr => eprintln!("{} {}", marker, msg),
        }
    }

    pub fn info(&self, msg: &str) {
        self.emit(Stream::Stdout, style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.emit(Stream::Stdout, style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        self.emit(Stream::Stderr, style("⚠").yellow(), msg);
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.emit(Stream::Stderr, style("→").dim(), style(msg).dim());
        }
    }

    /// Printed in JSON mode too, as an `{"error": ...}` object.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Indented `key: value` line under a header.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// Pretty JSON result on stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => self.error(&format!("Could not encode output: {}", e)),
        }
    }

    /// Spinner shown while waiting; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner().with_message(msg.to_string());
        if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(template);
        }
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        spinner
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored badge for a submission state.
pub fn state_badge(state: &str) -> String {
    match state {
        "success" => style(state).green().to_string(),
        "submitting" => style(state).yellow().to_string(),
        "error" => style(state).red().to_string(),
        _ => style(state).dim().to_string(),
    }
}

/// Hide all but the last four characters of a secret.
pub fn mask(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("abcdefgh"), "****efgh");
        assert_eq!(mask("abc"), "***");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_state_badge_keeps_text() {
        console::set_colors_enabled(false);
        assert_eq!(state_badge("success"), "success");
        assert_eq!(state_badge("idle"), "idle");
    }
}
