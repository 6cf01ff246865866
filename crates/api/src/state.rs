use std::sync::Arc;

use folio_db::SubmissionStore;
use folio_notify::ContactNotifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Everything is built once in `main` (or by a test) and injected here;
/// cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Persistent store for contact submissions.
    pub store: Arc<dyn SubmissionStore>,
    /// Email notifier; `None` when no delivery service is configured.
    pub notifier: Option<Arc<ContactNotifier>>,
}
