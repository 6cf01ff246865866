//! Row models.

pub mod contact_submission;
