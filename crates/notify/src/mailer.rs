//! The delivery service seam.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::MailerConfig;
use crate::delivery::resend::ResendMailer;
use crate::delivery::smtp::SmtpMailer;
use crate::error::DeliveryError;

/// One rendered email, ready to hand to a [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Sender, either `addr@host` or `Name <addr@host>`.
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Sends one message and reports success or failure. No retries.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError>;
}

/// Construct the mailer selected by `config`.
pub fn build_mailer(config: MailerConfig) -> Result<Arc<dyn Mailer>, DeliveryError> {
    let mailer: Arc<dyn Mailer> = match config {
        MailerConfig::Resend(resend) => Arc::new(ResendMailer::new(resend)?),
        MailerConfig::Smtp(smtp) => Arc::new(SmtpMailer::new(smtp)?),
    };
    Ok(mailer)
}
