//! Contact submission entity model.

use folio_core::types::{SubmissionId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
}
