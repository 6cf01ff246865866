//! Repository for the `contact_submissions` table.

use folio_core::contact::{NewContactSubmission, STATUS_NEW};
use sqlx::PgPool;

use crate::models::contact_submission::ContactSubmission;

/// Column list for `contact_submissions` queries.
const COLUMNS: &str = "\
    id, first_name, last_name, email, phone, \
    project_type, budget, message, status, created_at";

/// Insert-only access to contact submissions.
pub struct ContactSubmissionRepo;

impl ContactSubmissionRepo {
    /// Insert a submission with status `new`, returning the stored row
    /// including its generated id and creation timestamp.
    pub async fn create(
        pool: &PgPool,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions \
                (first_name, last_name, email, phone, project_type, budget, message, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.project_type)
            .bind(&input.budget)
            .bind(&input.message)
            .bind(STATUS_NEW)
            .fetch_one(pool)
            .await
    }
}
