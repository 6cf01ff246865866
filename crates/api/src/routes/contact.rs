//! Route definitions for the contact form.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST /            submit_contact
/// GET  /options     contact_options
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(contact::submit_contact))
        .route("/options", get(contact::contact_options))
}
