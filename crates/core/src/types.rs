/// Submission identifiers are PostgreSQL UUIDs generated on insert.
pub type SubmissionId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
