use axum::{debug_handler, Extension, Json};
use log::{error, warn};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::ApiError,
    models::contact::{ContactMessage, ContactMessageCreate},
    services::email_service::{notification_html, notification_text},
};

/// Fixed cap on how many records the list endpoint returns
const LIST_LIMIT: i64 = 1000;

/// Handles contact form submissions: validate, store, notify, respond.
///
/// The email notification is best-effort; its outcome is logged and
/// discarded, so a failing provider never fails the request.
#[debug_handler]
pub async fn create_contact_message(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ContactMessageCreate>,
) -> Result<Json<ContactMessage>, ApiError> {
    payload.validate()?;

    let record = ContactMessage::new(payload);

    state.store.insert(&record).await.map_err(|e| {
        error!("Error processing contact form: {}", e);
        ApiError::Internal("Failed to process contact form".to_string())
    })?;

    let subject = format!("Portfolio Contact: {}", record.subject);
    let text = notification_text(&record);
    let html = notification_html(&record);
    let delivered = state
        .mailer
        .send(&state.config.receiver_email, &subject, &text, Some(&html))
        .await;
    if !delivered {
        warn!("Notification email for submission {} was not delivered", record.id);
    }

    Ok(Json(record))
}

/// Returns all stored contact messages, capped at 1000 (admin endpoint)
#[debug_handler]
pub async fn list_contact_messages(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let records = state.store.list_all(LIST_LIMIT).await.map_err(|e| {
        error!("Error retrieving contact messages: {}", e);
        ApiError::Internal("Failed to retrieve messages".to_string())
    })?;

    Ok(Json(records))
}
