//! Repositories: one struct per table, static async methods over `&PgPool`.

pub mod contact_submission_repo;

pub use contact_submission_repo::ContactSubmissionRepo;
