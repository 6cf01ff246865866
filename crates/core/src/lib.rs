//! Domain types and validation for the portfolio contact backend.
//!
//! Nothing in this crate performs I/O: the database and delivery crates
//! build on these types, and the API crate maps [`error::CoreError`] to
//! HTTP responses.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod types;
