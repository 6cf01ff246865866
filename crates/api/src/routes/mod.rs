pub mod contact;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /contact                 submit the contact form (POST)
/// /contact/options         project types and budget ranges (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/contact", contact::router())
}
