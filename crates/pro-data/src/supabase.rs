//! Supabase (PostgREST) lead store.

use async_trait::async_trait;
use pro_core::LeadsConfig;
use pro_leads::{LeadRecord, LeadStore, StoreError};
use serde::Deserialize;

/// Inserts lead records into a hosted table through its REST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    table: String,
}

/// Error object returned by PostgREST.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl SupabaseStore {
    /// Create a store for `table` in the project at `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            table: table.into(),
        }
    }

    /// Create from lead settings, failing when URL or key is missing.
    pub fn from_config(config: &LeadsConfig) -> Result<Self, StoreError> {
        let url = config
            .supabase_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| StoreError::NotConfigured("missing supabase_url".to_string()))?;
        let key = config
            .anon_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| StoreError::NotConfigured("missing anon_key".to_string()))?;

        Ok(Self::new(url, key, config.table.clone()))
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Endpoint receiving inserts.
    pub fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// Headers sent with every insert.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", self.anon_key.clone()),
            ("Authorization", format!("Bearer {}", self.anon_key)),
            ("Content-Type", "application/json".to_string()),
            ("Prefer", "return=minimal".to_string()),
        ]
    }

    /// JSON body for one record: PostgREST takes an array of rows.
    pub fn body(record: &LeadRecord) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&[record])?)
    }
}

/// Map a non-success response to a `StoreError`.
pub fn rejection(status: u16, body: &str) -> StoreError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let message = match parsed {
        Some(ErrorBody {
            message: Some(message),
            code,
        }) => match code {
            Some(code) => format!("{} ({})", message, code),
            None => message,
        },
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => format!("HTTP {}", status),
    };

    StoreError::Rejected { status, message }
}

#[async_trait(?Send)]
impl LeadStore for SupabaseStore {
    async fn insert(&self, record: &LeadRecord) -> Result<(), StoreError> {
        let url = self.insert_url();
        let mut request = self.client.post(&url).body(Self::body(record)?);
        for (name, value) in self.headers() {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(table = %self.table, status = status.as_u16(), "Lead inserted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let err = rejection(status.as_u16(), &body);
        tracing::debug!(table = %self.table, status = status.as_u16(), error = %err, "Insert rejected");
        Err(err)
    }

    fn name(&self) -> &str {
        "supabase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SupabaseStore {
        SupabaseStore::new("https://demo.supabase.co/", "anon-key", "user-register")
    }

    #[test]
    fn test_insert_url() {
        assert_eq!(
            store().insert_url(),
            "https://demo.supabase.co/rest/v1/user-register"
        );
    }

    #[test]
    fn test_headers_carry_key() {
        let headers = store().headers();

        assert!(headers.contains(&("apikey", "anon-key".to_string())));
        assert!(headers.contains(&("Authorization", "Bearer anon-key".to_string())));
        assert!(headers.contains(&("Prefer", "return=minimal".to_string())));
    }

    #[test]
    fn test_body_is_single_row_array() {
        let record = LeadRecord {
            email: "a@b.com".to_string(),
            name: Some("Ana".to_string()),
            sport: None,
            accept_terms: true,
        };

        let body: serde_json::Value = serde_json::from_str(&SupabaseStore::body(&record).unwrap()).unwrap();

        assert_eq!(
            body,
            serde_json::json!([{
                "email": "a@b.com",
                "name": "Ana",
                "sport": null,
                "accept_terms": true
            }])
        );
    }

    #[test]
    fn test_from_config_requires_url_and_key() {
        let mut config = LeadsConfig::default();
        assert!(matches!(
            SupabaseStore::from_config(&config),
            Err(StoreError::NotConfigured(_))
        ));

        config.supabase_url = Some("https://demo.supabase.co".to_string());
        config.anon_key = Some("key".to_string());
        config.table = "leads".to_string();
        let store = SupabaseStore::from_config(&config).unwrap();
        assert_eq!(store.table(), "leads");
    }

    #[test]
    fn test_rejection_uses_message_field() {
        let err = rejection(
            409,
            r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value violates unique constraint"}"#,
        );

        assert_eq!(
            err,
            StoreError::Rejected {
                status: 409,
                message: "duplicate key value violates unique constraint (23505)".to_string(),
            }
        );
    }

    #[test]
    fn test_rejection_without_json() {
        assert_eq!(
            rejection(502, "Bad Gateway"),
            StoreError::Rejected {
                status: 502,
                message: "Bad Gateway".to_string(),
            }
        );
        assert_eq!(
            rejection(500, ""),
            StoreError::Rejected {
                status: 500,
                message: "HTTP 500".to_string(),
            }
        );
    }
}
