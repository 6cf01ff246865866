//! Sends the operator notification and the submitter acknowledgment.

use std::sync::Arc;

use folio_db::models::contact_submission::ContactSubmission;

use crate::config::NotifierSettings;
use crate::error::DeliveryError;
use crate::mailer::Mailer;
use crate::templates;

/// Outcome of one [`ContactNotifier::notify`] call, one result per message.
#[derive(Debug)]
pub struct NotificationReport {
    pub operator: Result<(), DeliveryError>,
    pub submitter: Result<(), DeliveryError>,
}

impl NotificationReport {
    /// Both messages were accepted by the delivery service.
    pub fn is_complete(&self) -> bool {
        self.operator.is_ok() && self.submitter.is_ok()
    }
}

/// Renders and dispatches the two contact emails.
pub struct ContactNotifier {
    mailer: Arc<dyn Mailer>,
    settings: NotifierSettings,
}

impl ContactNotifier {
    pub fn new(mailer: Arc<dyn Mailer>, settings: NotifierSettings) -> Self {
        Self { mailer, settings }
    }

    /// Send the operator notification, then the submitter acknowledgment.
    ///
    /// The sends are sequential and independent: the acknowledgment is
    /// attempted even when the operator message failed. Failures are logged
    /// here and returned in the report; nothing is retried.
    pub async fn notify(&self, submission: &ContactSubmission) -> NotificationReport {
        let operator_email = templates::operator_notification(submission, &self.settings);
        let operator = self.mailer.send(&operator_email).await;
        if let Err(e) = &operator {
            tracing::error!(
                submission_id = %submission.id,
                recipient = "operator",
                error = %e,
                "Failed to send contact notification",
            );
        }

        let submitter_email = templates::submitter_acknowledgment(submission, &self.settings);
        let submitter = self.mailer.send(&submitter_email).await;
        if let Err(e) = &submitter {
            tracing::error!(
                submission_id = %submission.id,
                recipient = "submitter",
                error = %e,
                "Failed to send contact acknowledgment",
            );
        }

        NotificationReport { operator, submitter }
    }
}
