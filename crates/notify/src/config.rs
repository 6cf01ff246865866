//! Environment-driven configuration for the mailer and the notifier.
//!
//! Loading goes through a lookup function so tests can feed a map instead
//! of mutating the process environment.

use crate::delivery::resend::ResendConfig;
use crate::delivery::smtp::SmtpConfig;

/// Default sender when `MAIL_FROM` is not set (Resend's shared test sender).
const DEFAULT_FROM_ADDRESS: &str = "Portfolio <onboarding@resend.dev>";

/// Default site link used in the acknowledgment email.
const DEFAULT_SITE_URL: &str = "http://localhost:3000";

// ---------------------------------------------------------------------------
// MailerConfig
// ---------------------------------------------------------------------------

/// Which delivery service to use.
#[derive(Debug, Clone)]
pub enum MailerConfig {
    Resend(ResendConfig),
    Smtp(SmtpConfig),
}

impl MailerConfig {
    /// Load from environment variables.
    ///
    /// `RESEND_API_KEY` selects the Resend API; otherwise `SMTP_HOST` selects
    /// SMTP. Returns `None` when neither is set, meaning email delivery is
    /// not configured.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        if let Some(resend) = ResendConfig::from_lookup(&lookup) {
            return Some(Self::Resend(resend));
        }
        SmtpConfig::from_lookup(&lookup).map(Self::Smtp)
    }
}

// ---------------------------------------------------------------------------
// NotifierSettings
// ---------------------------------------------------------------------------

/// Owner details printed at the bottom of the acknowledgment email.
///
/// Each line is optional; missing ones are left out.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Signature {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.title.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// Addresses and site details used when rendering contact emails.
#[derive(Debug, Clone)]
pub struct NotifierSettings {
    /// Sender of both messages.
    pub from_address: String,
    /// Fixed address that receives lead notifications.
    pub operator_address: String,
    /// Site link included in the acknowledgment.
    pub site_url: String,
    pub signature: Signature,
}

impl NotifierSettings {
    /// Load from environment variables.
    ///
    /// Returns `None` if `CONTACT_OPERATOR_EMAIL` is not set.
    ///
    /// | Variable                 | Required | Default                              |
    /// |--------------------------|----------|--------------------------------------|
    /// | `CONTACT_OPERATOR_EMAIL` | yes      | -                                    |
    /// | `MAIL_FROM`              | no       | `Portfolio <onboarding@resend.dev>`  |
    /// | `SITE_URL`               | no       | `http://localhost:3000`              |
    /// | `SITE_OWNER_NAME`        | no       | -                                    |
    /// | `SITE_OWNER_TITLE`       | no       | -                                    |
    /// | `SITE_OWNER_EMAIL`       | no       | -                                    |
    /// | `SITE_OWNER_PHONE`       | no       | -                                    |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Some(Self {
            operator_address: non_empty("CONTACT_OPERATOR_EMAIL")?,
            from_address: non_empty("MAIL_FROM").unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            site_url: non_empty("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            signature: Signature {
                name: non_empty("SITE_OWNER_NAME"),
                title: non_empty("SITE_OWNER_TITLE"),
                email: non_empty("SITE_OWNER_EMAIL"),
                phone: non_empty("SITE_OWNER_PHONE"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn no_mailer_without_resend_key_or_smtp_host() {
        assert!(MailerConfig::from_lookup(lookup(&[])).is_none());
    }

    #[test]
    fn resend_key_takes_precedence_over_smtp() {
        let config = MailerConfig::from_lookup(lookup(&[
            ("RESEND_API_KEY", "re_123"),
            ("SMTP_HOST", "smtp.example.com"),
        ]));
        match config {
            Some(MailerConfig::Resend(resend)) => {
                assert_eq!(resend.api_key, "re_123");
                assert_eq!(resend.api_url, "https://api.resend.com");
            }
            other => panic!("expected Resend config, got {other:?}"),
        }
    }

    #[test]
    fn smtp_selected_when_only_host_is_set() {
        let config = MailerConfig::from_lookup(lookup(&[("SMTP_HOST", "smtp.example.com")]));
        match config {
            Some(MailerConfig::Smtp(smtp)) => {
                assert_eq!(smtp.smtp_host, "smtp.example.com");
                assert_eq!(smtp.smtp_port, 587);
            }
            other => panic!("expected SMTP config, got {other:?}"),
        }
    }

    #[test]
    fn settings_require_operator_address() {
        assert!(NotifierSettings::from_lookup(lookup(&[("SITE_URL", "https://x.dev")])).is_none());
        assert!(NotifierSettings::from_lookup(lookup(&[("CONTACT_OPERATOR_EMAIL", " ")])).is_none());
    }

    #[test]
    fn settings_apply_defaults() {
        let settings =
            NotifierSettings::from_lookup(lookup(&[("CONTACT_OPERATOR_EMAIL", "owner@x.dev")]))
                .unwrap();
        assert_eq!(settings.operator_address, "owner@x.dev");
        assert_eq!(settings.from_address, DEFAULT_FROM_ADDRESS);
        assert_eq!(settings.site_url, DEFAULT_SITE_URL);
        assert!(settings.signature.is_empty());
    }

    #[test]
    fn settings_read_signature_lines() {
        let settings = NotifierSettings::from_lookup(lookup(&[
            ("CONTACT_OPERATOR_EMAIL", "owner@x.dev"),
            ("SITE_OWNER_NAME", "Ada Lovelace"),
            ("SITE_OWNER_PHONE", "+229 00 00 00 00"),
        ]))
        .unwrap();
        assert_eq!(settings.signature.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(settings.signature.phone.as_deref(), Some("+229 00 00 00 00"));
        assert_eq!(settings.signature.title, None);
        assert!(!settings.signature.is_empty());
    }
}
