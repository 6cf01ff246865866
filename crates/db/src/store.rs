//! The persistent store as seen by the submission endpoint.
//!
//! The API holds an `Arc<dyn SubmissionStore>` built once at startup, so
//! tests can substitute an in-memory implementation.

use async_trait::async_trait;
use folio_core::contact::NewContactSubmission;

use crate::models::contact_submission::ContactSubmission;
use crate::repositories::ContactSubmissionRepo;
use crate::DbPool;

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert one submission and return it with its generated id.
    async fn insert(&self, input: &NewContactSubmission) -> Result<ContactSubmission, sqlx::Error>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// [`SubmissionStore`] backed by a Postgres pool.
#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: DbPool,
}

impl PgSubmissionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, input: &NewContactSubmission) -> Result<ContactSubmission, sqlx::Error> {
        let submission = ContactSubmissionRepo::create(&self.pool, input).await?;
        tracing::debug!(submission_id = %submission.id, "Contact submission inserted");
        Ok(submission)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
