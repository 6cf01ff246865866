//! Handlers for the contact form.
//!
//! `POST /contact` validates, stores, then notifies. Only body parsing,
//! validation and persistence affect the response: once the row exists the
//! caller gets a success, whatever happened to the emails.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use folio_core::catalog::{CategoryOption, BUDGETS, PROJECT_TYPES};
use folio_core::contact::{ContactRequest, SUCCESS_MESSAGE};
use folio_core::types::SubmissionId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of a successful submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAccepted {
    pub success: bool,
    pub message: &'static str,
    pub submission_id: SubmissionId,
}

/// Selectable categories for the form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactOptions {
    pub project_types: &'static [CategoryOption],
    pub budgets: &'static [CategoryOption],
}

// ---------------------------------------------------------------------------
// POST /contact
// ---------------------------------------------------------------------------

/// Record a contact submission and send the two notification emails.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::Internal(format!("Unreadable contact body: {}", rejection.body_text()))
    })?;

    let input = request.validate()?;

    let submission = state.store.insert(&input).await?;

    tracing::info!(
        submission_id = %submission.id,
        project_type = %submission.project_type,
        "Contact submission recorded",
    );

    match &state.notifier {
        Some(notifier) => {
            let report = notifier.notify(&submission).await;
            if report.is_complete() {
                tracing::info!(submission_id = %submission.id, "Contact emails sent");
            } else {
                tracing::warn!(
                    submission_id = %submission.id,
                    operator_notified = report.operator.is_ok(),
                    submitter_notified = report.submitter.is_ok(),
                    "Contact submission recorded with incomplete notifications",
                );
            }
        }
        None => {
            tracing::warn!(
                submission_id = %submission.id,
                "Email delivery not configured, skipping contact notifications",
            );
        }
    }

    Ok(Json(SubmissionAccepted {
        success: true,
        message: SUCCESS_MESSAGE,
        submission_id: submission.id,
    }))
}

// ---------------------------------------------------------------------------
// GET /contact/options
// ---------------------------------------------------------------------------

/// List the project types and budget ranges the form offers.
pub async fn contact_options() -> Json<DataResponse<ContactOptions>> {
    Json(DataResponse {
        data: ContactOptions {
            project_types: PROJECT_TYPES,
            budgets: BUDGETS,
        },
    })
}
