//! Concrete [`Mailer`](crate::Mailer) implementations.

pub mod resend;
pub mod smtp;
