//! Lead form schema and validation.

use serde::{Deserialize, Serialize};

/// Inline message shown next to a malformed email.
pub const INVALID_EMAIL_MESSAGE: &str = "El correo electrónico no es válido";

/// Sports offered in the registration form's picker.
///
/// Suggestions only: any string is accepted as a sport.
pub const SPORT_SUGGESTIONS: [&str; 6] = [
    "Fútbol",
    "Tenis",
    "Ciclismo",
    "Natación",
    "Baloncesto",
    "Otro",
];

/// Raw form input as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCandidate {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub accept_terms: Option<bool>,
}

impl LeadCandidate {
    /// Candidate with only an email.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    pub fn accept_terms(mut self, accept: bool) -> Self {
        self.accept_terms = Some(accept);
        self
    }
}

/// A candidate that passed validation.
///
/// Optional fields are carried through untouched; collapsing empty strings
/// and absent consent happens when the write record is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub email: String,
    pub name: Option<String>,
    pub sport: Option<String>,
    pub accept_terms: Option<bool>,
}

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    Name,
    Sport,
    AcceptTerms,
}

impl Field {
    /// Key used by the form and the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name => "name",
            Field::Sport => "sport",
            Field::AcceptTerms => "acceptTerms",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldErrorKind {
    InvalidFormat,
}

/// A single field failure with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
    pub message: String,
}

/// All field failures of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First error recorded for `field`.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Message for `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Drop the errors of one field, keeping the others.
    pub fn clear_field(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a candidate.
///
/// Only `email` has rules; every other field passes as given.
pub fn validate(candidate: &LeadCandidate) -> Result<LeadSubmission, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(error) = validate_email(&candidate.email) {
        errors.push(error);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(LeadSubmission {
        email: candidate.email.clone(),
        name: candidate.name.clone(),
        sport: candidate.sport.clone(),
        accept_terms: candidate.accept_terms,
    })
}

/// Validate the email field alone.
pub fn validate_email(email: &str) -> Option<FieldError> {
    if is_valid_email(email) {
        None
    } else {
        Some(FieldError {
            field: Field::Email,
            kind: FieldErrorKind::InvalidFormat,
            message: INVALID_EMAIL_MESSAGE.to_string(),
        })
    }
}

/// Check an address against the accepted email grammar.
///
/// `local@domain` where the local part uses `A-Z a-z 0-9 _ ' + - .`, does
/// not start with a dot, has no `..`, and does not end in `.` or `'`; the
/// domain is at least two dot-separated labels whose last label is two or
/// more ASCII letters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    let Some(last) = local.chars().last() else {
        return false;
    };
    if local.starts_with('.') || local.contains("..") {
        return false;
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.');
    local.chars().all(allowed) && last != '.' && last != '\''
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }

    let label_ok = |label: &&str| {
        let mut chars = label.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
            }
            _ => false,
        }
    };

    rest.iter().all(label_ok) && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "test@example.com",
            "a@b.co",
            "ana.maria@correo.com.co",
            "o'neil+pro@sub-domain.example.org",
            "USER_1@EXAMPLE.COM",
        ] {
            assert!(is_valid_email(email), "{} should be valid", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "test",
            "test@",
            "@example.com",
            "test@example",
            "test@@example.com",
            "a@b@c.com",
            ".test@example.com",
            "te..st@example.com",
            "test.@example.com",
            "test'@example.com",
            "test@.example.com",
            "test@example..com",
            "test@example.c",
            "test@example.c0m",
            "test@-example.com",
            "te st@example.com",
            " test@example.com",
            "tést@example.com",
        ] {
            assert!(!is_valid_email(email), "{:?} should be invalid", email);
        }
    }

    #[test]
    fn test_validate_email_only() {
        let submission = validate(&LeadCandidate::with_email("test@example.com")).unwrap();

        assert_eq!(submission.email, "test@example.com");
        assert!(submission.name.is_none());
        assert!(submission.sport.is_none());
        assert!(submission.accept_terms.is_none());
    }

    #[test]
    fn test_validate_all_fields() {
        let candidate = LeadCandidate::with_email("test@example.com")
            .name("Test User")
            .sport("Fútbol")
            .accept_terms(true);

        let submission = validate(&candidate).unwrap();

        assert_eq!(submission.name.as_deref(), Some("Test User"));
        assert_eq!(submission.sport.as_deref(), Some("Fútbol"));
        assert_eq!(submission.accept_terms, Some(true));
    }

    #[test]
    fn test_validate_free_form_sport() {
        let candidate = LeadCandidate::with_email("a@b.com").sport("Ultimate frisbee");
        assert!(validate(&candidate).is_ok());
    }

    #[test]
    fn test_invalid_email_message() {
        let errors = validate(&LeadCandidate::with_email("test")).unwrap_err();

        assert_eq!(errors.len(), 1);
        let error = errors.get(Field::Email).unwrap();
        assert_eq!(error.kind, FieldErrorKind::InvalidFormat);
        assert_eq!(error.message, "El correo electrónico no es válido");
        assert_eq!(errors.message(Field::Email), Some(INVALID_EMAIL_MESSAGE));
        assert!(errors.message(Field::Name).is_none());
    }

    #[test]
    fn test_missing_at_or_dot_fails_with_literal_message() {
        for email in ["localdomain.tld", "local@domaintld"] {
            let errors = validate(&LeadCandidate::with_email(email)).unwrap_err();
            assert_eq!(errors.message(Field::Email), Some(INVALID_EMAIL_MESSAGE));
        }
    }

    #[test]
    fn test_clear_field() {
        let mut errors = validate(&LeadCandidate::with_email("nope")).unwrap_err();
        errors.clear_field(Field::Email);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_candidate_deserializes_camel_case() {
        let candidate: LeadCandidate = serde_json::from_str(
            r#"{"email": "a@b.com", "acceptTerms": true}"#,
        )
        .unwrap();

        assert_eq!(candidate.accept_terms, Some(true));
        assert!(candidate.name.is_none());
    }
}
