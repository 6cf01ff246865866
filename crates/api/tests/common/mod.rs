#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::{LogFormat, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::contact::{NewContactSubmission, STATUS_NEW};
use folio_db::models::contact_submission::ContactSubmission;
use folio_db::SubmissionStore;
use folio_notify::{ContactNotifier, DeliveryError, Mailer, NotifierSettings, OutgoingEmail, Signature};

pub const OPERATOR_ADDRESS: &str = "owner@portfolio.test";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        database_max_connections: 1,
    }
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// In-memory store; when `fail` is set every call returns a pool timeout.
#[derive(Default)]
pub struct FakeStore {
    pub inserted: Mutex<Vec<ContactSubmission>>,
    pub fail: bool,
}

impl FakeStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn rows(&self) -> Vec<ContactSubmission> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionStore for FakeStore {
    async fn insert(&self, input: &NewContactSubmission) -> Result<ContactSubmission, sqlx::Error> {
        if self.fail {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let row = ContactSubmission {
            id: uuid::Uuid::new_v4(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            project_type: input.project_type.clone(),
            budget: input.budget.clone(),
            message: input.message.clone(),
            status: STATUS_NEW.to_string(),
            created_at: Utc::now(),
        };
        self.inserted.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.fail {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

/// Records every attempted message; fails sends to the listed recipients.
#[derive(Default)]
pub struct RecordingMailer {
    pub attempts: Mutex<Vec<OutgoingEmail>>,
    pub fail_for: Vec<String>,
}

impl RecordingMailer {
    pub fn failing_for(recipients: &[&str]) -> Self {
        Self {
            fail_for: recipients.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn attempts(&self) -> Vec<OutgoingEmail> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        self.attempts.lock().unwrap().push(email.clone());
        if self.fail_for.contains(&email.to) {
            return Err(DeliveryError::HttpStatus {
                status: 500,
                body: "delivery service down".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// A router plus handles on the fakes behind it.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<FakeStore>,
    pub mailer: Arc<RecordingMailer>,
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over the given fakes. `mailer: None` runs without email delivery.
pub fn build_test_app(store: FakeStore, mailer: Option<RecordingMailer>) -> TestApp {
    let store = Arc::new(store);
    let configured = mailer.is_some();
    let mailer = Arc::new(mailer.unwrap_or_default());

    let notifier = configured.then(|| {
        Arc::new(ContactNotifier::new(
            Arc::clone(&mailer) as Arc<dyn Mailer>,
            NotifierSettings {
                from_address: "Portfolio <noreply@portfolio.test>".to_string(),
                operator_address: OPERATOR_ADDRESS.to_string(),
                site_url: "https://portfolio.test".to_string(),
                signature: Signature::default(),
            },
        ))
    });

    let state = AppState {
        store: Arc::clone(&store) as Arc<dyn SubmissionStore>,
        notifier,
    };

    TestApp {
        router: build_app_router(state, &test_config()),
        store,
        mailer,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
