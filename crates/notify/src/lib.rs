//! Email notifications for contact submissions.
//!
//! - [`Mailer`]: the delivery service seam, "send one message".
//! - [`delivery`]: concrete mailers (Resend HTTP API, SMTP).
//! - [`templates`]: the operator notification and submitter acknowledgment.
//! - [`ContactNotifier`]: renders both messages and sends them in order,
//!   reporting each outcome independently in a [`NotificationReport`].

pub mod config;
pub mod delivery;
pub mod error;
pub mod mailer;
pub mod notifier;
pub mod templates;

pub use config::{MailerConfig, NotifierSettings, Signature};
pub use error::DeliveryError;
pub use mailer::{build_mailer, Mailer, OutgoingEmail};
pub use notifier::{ContactNotifier, NotificationReport};
