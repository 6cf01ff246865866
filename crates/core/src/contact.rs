//! Contact form submission: wire DTO, validated input, and user-facing messages.

use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Status assigned to every submission when it is first recorded.
pub const STATUS_NEW: &str = "new";

// ---------------------------------------------------------------------------
// User-facing messages
// ---------------------------------------------------------------------------

/// Returned when any required field is missing or empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Tous les champs sont requis";

/// Returned alongside the submission id once the record is stored.
pub const SUCCESS_MESSAGE: &str = "Votre demande a été envoyée avec succès";

/// Returned for any server-side failure; the cause is only logged.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Une erreur est survenue lors de l'envoi";

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Raw contact form body as posted by the site.
///
/// Every field is optional here so that a missing key or an explicit `null`
/// surfaces as a validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub message: Option<String>,
}

/// A contact submission that passed validation and is ready to be stored.
///
/// Values are kept exactly as received; only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
}

impl ContactRequest {
    /// Check that all seven fields are present and non-empty.
    ///
    /// No format checks are applied: any non-empty string is accepted,
    /// whitespace-only values included.
    pub fn validate(self) -> Result<NewContactSubmission, CoreError> {
        Ok(NewContactSubmission {
            first_name: required(self.first_name)?,
            last_name: required(self.last_name)?,
            email: required(self.email)?,
            phone: required(self.phone)?,
            project_type: required(self.project_type)?,
            budget: required(self.budget)?,
            message: required(self.message)?,
        })
    }
}

fn required(value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn complete() -> ContactRequest {
        ContactRequest {
            first_name: Some("Jean".into()),
            last_name: Some("Dupont".into()),
            email: Some("jean@x.com".into()),
            phone: Some("+22900000000".into()),
            project_type: Some("saas".into()),
            budget: Some("250-500k".into()),
            message: Some("Besoin d'un MVP".into()),
        }
    }

    #[test]
    fn complete_request_is_valid() {
        let input = complete().validate().unwrap();
        assert_eq!(input.first_name, "Jean");
        assert_eq!(input.project_type, "saas");
        assert_eq!(input.message, "Besoin d'un MVP");
    }

    #[test]
    fn each_missing_field_is_rejected() {
        let clears: [fn(&mut ContactRequest); 7] = [
            |r| r.first_name = None,
            |r| r.last_name = None,
            |r| r.email = None,
            |r| r.phone = None,
            |r| r.project_type = None,
            |r| r.budget = None,
            |r| r.message = None,
        ];
        for clear in clears {
            let mut request = complete();
            clear(&mut request);
            assert_matches!(
                request.validate(),
                Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE
            );
        }
    }

    #[test]
    fn empty_value_is_rejected() {
        let mut request = complete();
        request.message = Some(String::new());
        assert_matches!(request.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn whitespace_only_values_are_accepted_verbatim() {
        let mut request = complete();
        request.phone = Some("  \t ".into());
        request.message = Some("   ".into());

        let input = request.validate().unwrap();
        assert_eq!(input.phone, "  \t ");
        assert_eq!(input.message, "   ");
    }

    #[test]
    fn malformed_values_are_accepted_verbatim() {
        let mut request = complete();
        request.email = Some("not an email".into());
        request.project_type = Some("something else".into());
        request.first_name = Some("  Jean ".into());

        let input = request.validate().unwrap();
        assert_eq!(input.email, "not an email");
        assert_eq!(input.project_type, "something else");
        assert_eq!(input.first_name, "  Jean ");
    }

    #[test]
    fn deserializes_camel_case_with_missing_and_null_keys() {
        let request: ContactRequest = serde_json::from_str(
            r#"{"firstName":"Jean","lastName":null,"projectType":"saas"}"#,
        )
        .unwrap();
        assert_eq!(request.first_name.as_deref(), Some("Jean"));
        assert_eq!(request.last_name, None);
        assert_eq!(request.project_type.as_deref(), Some("saas"));
        assert_eq!(request.budget, None);
    }
}
