//! Email delivery via the Resend HTTP API.
//!
//! [`ResendMailer`] posts one JSON message per call to `{api_url}/emails`
//! with a bearer API key. A single attempt is made; any non-2xx answer is a
//! failure.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::DeliveryError;
use crate::mailer::{Mailer, OutgoingEmail};

/// Public Resend API base URL.
const DEFAULT_API_URL: &str = "https://api.resend.com";

/// HTTP request timeout for a single delivery.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// ResendConfig
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct ResendConfig {
    pub api_key: String,
    /// API base URL without trailing slash.
    pub api_url: String,
}

impl std::fmt::Debug for ResendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl ResendConfig {
    /// Returns `None` if `RESEND_API_KEY` is not set.
    ///
    /// | Variable         | Required | Default                  |
    /// |------------------|----------|--------------------------|
    /// | `RESEND_API_KEY` | yes      | -                        |
    /// | `RESEND_API_URL` | no       | `https://api.resend.com` |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup("RESEND_API_KEY").filter(|k| !k.is_empty())?;
        let api_url = lookup("RESEND_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Some(Self { api_key, api_url })
    }
}

// ---------------------------------------------------------------------------
// ResendMailer
// ---------------------------------------------------------------------------

/// Request body for `POST /emails`.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

impl<'a> From<&'a OutgoingEmail> for SendEmailRequest<'a> {
    fn from(email: &'a OutgoingEmail) -> Self {
        Self {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
        }
    }
}

/// Sends emails through the Resend API.
pub struct ResendMailer {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendMailer {
    pub fn new(config: ResendConfig) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.config.api_url)
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&SendEmailRequest::from(email))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(to = %email.to, "Email sent via Resend");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lookup_trims_trailing_slash() {
        let config = ResendConfig::from_lookup(|key| match key {
            "RESEND_API_KEY" => Some("re_123".to_string()),
            "RESEND_API_URL" => Some("http://127.0.0.1:8025/".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8025");

        let mailer = ResendMailer::new(config).unwrap();
        assert_eq!(mailer.endpoint(), "http://127.0.0.1:8025/emails");
    }

    #[test]
    fn empty_key_means_unconfigured() {
        assert!(ResendConfig::from_lookup(|_| Some(String::new())).is_none());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ResendConfig {
            api_key: "re_secret".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        };
        assert!(!format!("{config:?}").contains("re_secret"));
    }

    #[test]
    fn request_body_wraps_recipient_in_array() {
        let email = OutgoingEmail {
            from: "Portfolio <onboarding@resend.dev>".to_string(),
            to: "jean@x.com".to_string(),
            subject: "Bonjour".to_string(),
            html: "<p>Salut</p>".to_string(),
        };
        let json = serde_json::to_value(SendEmailRequest::from(&email)).unwrap();
        assert_eq!(json["to"], serde_json::json!(["jean@x.com"]));
        assert_eq!(json["from"], "Portfolio <onboarding@resend.dev>");
        assert_eq!(json["html"], "<p>Salut</p>");
    }
}
