//! Site and lead-capture configuration.

use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default remote table that receives lead inserts.
pub const DEFAULT_LEADS_TABLE: &str = "user-register";

/// Default delay before a successful registration resets the form.
pub const DEFAULT_RESET_DELAY_MS: u64 = 5_000;

/// Default upper bound for the lead insert call.
pub const DEFAULT_WRITE_TIMEOUT_MS: u64 = 10_000;

/// Environment variable overriding `leads.supabase_url`.
pub const ENV_SUPABASE_URL: &str = "PRO_SUPABASE_URL";

/// Environment variable overriding `leads.anon_key`.
pub const ENV_SUPABASE_ANON_KEY: &str = "PRO_SUPABASE_ANON_KEY";

/// Complete site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public site metadata.
    #[serde(default)]
    pub site: SiteMeta,

    /// Lead-capture settings.
    #[serde(default)]
    pub leads: LeadsConfig,
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, CoreError> {
        toml::to_string_pretty(self).map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Takes the lookup as a function so browser builds can feed
    /// compile-time values and tests can feed fixed maps.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_SUPABASE_URL).filter(|v| !v.is_empty()) {
            self.leads.supabase_url = Some(url);
        }
        if let Some(key) = lookup(ENV_SUPABASE_ANON_KEY).filter(|v| !v.is_empty()) {
            self.leads.anon_key = Some(key);
        }
        self
    }

    /// Check that the configuration can be used to capture leads.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut problems = Vec::new();

        match self.leads.supabase_url.as_deref() {
            None | Some("") => problems.push("leads.supabase_url is not set".to_string()),
            Some(url) if !(url.starts_with("https://") || url.starts_with("http://")) => {
                problems.push(format!("leads.supabase_url must be an http(s) URL: {}", url))
            }
            _ => {}
        }
        if self.leads.anon_key.as_deref().map_or(true, str::is_empty) {
            problems.push("leads.anon_key is not set".to_string());
        }
        if self.leads.table.trim().is_empty() {
            problems.push("leads.table is empty".to_string());
        }
        if self.leads.write_timeout_ms == 0 {
            problems.push("leads.write_timeout_ms must be greater than zero".to_string());
        }
        if self.leads.reset_delay_ms == 0 {
            problems.push("leads.reset_delay_ms must be greater than zero".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidConfig(problems.join("; ")))
        }
    }
}

/// Public metadata for the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Brand name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Meta description.
    #[serde(default = "default_description")]
    pub description: String,

    /// Canonical URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Public launch instant (RFC 3339).
    #[serde(default = "default_launch_at")]
    pub launch_at: DateTime<FixedOffset>,
}

fn default_name() -> String {
    "PRO Manizales".to_string()
}

fn default_title() -> String {
    "PRO Manizales | Plataforma Deportiva para Atletas".to_string()
}

fn default_description() -> String {
    "PRO Manizales es la plataforma deportiva que conecta atletas, organiza eventos y potencia el deporte en Manizales. Únete a la comunidad deportiva más grande de la ciudad.".to_string()
}

fn default_url() -> String {
    "https://promanizales.com".to_string()
}

/// Midnight on April 14, 2025 in Manizales (UTC-5).
pub fn default_launch_at() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-04-14T00:00:00-05:00")
        .unwrap_or_else(|_| DateTime::UNIX_EPOCH.fixed_offset())
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: default_name(),
            title: default_title(),
            description: default_description(),
            url: default_url(),
            launch_at: default_launch_at(),
        }
    }
}

/// Settings for the lead insert collaborator and the registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadsConfig {
    /// Project URL of the hosted backend (e.g. `https://xyz.supabase.co`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supabase_url: Option<String>,

    /// Public (anon) API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,

    /// Table receiving inserts.
    #[serde(default = "default_table")]
    pub table: String,

    /// Upper bound for the insert call, in milliseconds.
    #[serde(default = "default_write_timeout_ms")]
    pub write_timeout_ms: u64,

    /// Delay before a successful form resets, in milliseconds.
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
}

fn default_table() -> String {
    DEFAULT_LEADS_TABLE.to_string()
}

fn default_write_timeout_ms() -> u64 {
    DEFAULT_WRITE_TIMEOUT_MS
}

fn default_reset_delay_ms() -> u64 {
    DEFAULT_RESET_DELAY_MS
}

impl Default for LeadsConfig {
    fn default() -> Self {
        Self {
            supabase_url: None,
            anon_key: None,
            table: default_table(),
            write_timeout_ms: DEFAULT_WRITE_TIMEOUT_MS,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
        }
    }
}

impl LeadsConfig {
    /// Insert timeout as a `Duration`.
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    /// Auto-reset delay as a `Duration`.
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// Whether both the project URL and key are present.
    pub fn is_remote_configured(&self) -> bool {
        self.supabase_url.as_deref().map_or(false, |u| !u.is_empty())
            && self.anon_key.as_deref().map_or(false, |k| !k.is_empty())
    }
}

/// Generate a commented default `pro.toml`.
pub fn generate_default_config() -> String {
    format!(
        r#"# PRO Manizales landing configuration

[site]
name = "PRO Manizales"
url = "https://promanizales.com"
launch_at = "2025-04-14T00:00:00-05:00"

[leads]
# supabase_url = "https://your-project.supabase.co"
# anon_key = "public-anon-key"
table = "{table}"
write_timeout_ms = {timeout}
reset_delay_ms = {reset}
"#,
        table = DEFAULT_LEADS_TABLE,
        timeout = DEFAULT_WRITE_TIMEOUT_MS,
        reset = DEFAULT_RESET_DELAY_MS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn configured() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.leads.supabase_url = Some("https://demo.supabase.co".to_string());
        config.leads.anon_key = Some("anon".to_string());
        config
    }

    #[test]
    fn test_site_config_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.site.name, "PRO Manizales");
        assert_eq!(config.site.url, "https://promanizales.com");
        assert_eq!(config.leads.table, "user-register");
        assert_eq!(config.leads.reset_delay(), Duration::from_secs(5));
        assert_eq!(config.leads.write_timeout(), Duration::from_secs(10));
        assert!(!config.leads.is_remote_configured());
    }

    #[test]
    fn test_default_launch_date() {
        let launch = default_launch_at();
        assert_eq!(launch.to_rfc3339(), "2025-04-14T00:00:00-05:00");
    }

    #[test]
    fn test_parse_generated_config() {
        let config = SiteConfig::from_toml_str(&generate_default_config()).unwrap();

        assert_eq!(config.leads.table, DEFAULT_LEADS_TABLE);
        assert_eq!(config.leads.reset_delay_ms, DEFAULT_RESET_DELAY_MS);
        assert_eq!(config.site.launch_at, default_launch_at());
        assert!(config.leads.supabase_url.is_none());
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[leads]
supabase_url = "https://abc.supabase.co"
anon_key = "key"
"#,
        )
        .unwrap();

        assert_eq!(config.site.name, "PRO Manizales");
        assert_eq!(config.leads.table, "user-register");
        assert!(config.leads.is_remote_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_json() {
        let config = SiteConfig::from_json_str(
            r#"{"leads": {"table": "leads", "reset_delay_ms": 1000}}"#,
        )
        .unwrap();

        assert_eq!(config.leads.table, "leads");
        assert_eq!(config.leads.reset_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_parse_error() {
        let result = SiteConfig::from_toml_str("[leads\ntable = ");
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }

    #[test]
    fn test_toml_roundtrip_keeps_launch_date() {
        let config = configured();
        let rendered = config.to_toml_string().unwrap();
        let parsed = SiteConfig::from_toml_str(&rendered).unwrap();

        assert_eq!(parsed.site.launch_at, config.site.launch_at);
        assert_eq!(parsed.leads.supabase_url, config.leads.supabase_url);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_SUPABASE_URL, "https://env.supabase.co"),
            (ENV_SUPABASE_ANON_KEY, "env-key"),
        ]
        .into_iter()
        .collect();

        let config = SiteConfig::default()
            .with_env_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(
            config.leads.supabase_url.as_deref(),
            Some("https://env.supabase.co")
        );
        assert_eq!(config.leads.anon_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = configured().with_env_overrides(|_| Some(String::new()));
        assert_eq!(
            config.leads.supabase_url.as_deref(),
            Some("https://demo.supabase.co")
        );
    }

    #[test]
    fn test_validate_reports_all_problems() {
        let mut config = SiteConfig::default();
        config.leads.write_timeout_ms = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("supabase_url"));
        assert!(err.contains("anon_key"));
        assert!(err.contains("write_timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = configured();
        config.leads.supabase_url = Some("ftp://demo".to_string());

        assert!(config.validate().is_err());
    }
}
