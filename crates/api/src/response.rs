//! Shared response envelope types for API handlers.
//!
//! Read-only endpoints wrap their payload in a `{ "data": ... }` envelope.
//! The contact submission endpoint keeps its own flat contract.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
