//! Request handler for the contact endpoint.

use super::AppState;
use crate::models::{ConfirmationResult, ContactRequest};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::{info, warn};

/// Message returned with a 400 when the body is not valid JSON.
pub const MALFORMED_BODY_MESSAGE: &str = "リクエストの形式が正しくありません。";

/// Render the confirmation for a received request.
///
/// Every field is interpolated verbatim; nothing is escaped or truncated.
pub fn confirmation_message(request: &ContactRequest) -> String {
    format!(
        "{}さん、ありがとうございます！\n  メール({})\n  電話番号({}-{}-{})\n  お問い合わせ種別({})\n  お問い合わせ内容({})\n  を受け取りました。",
        request.name,
        request.email,
        request.tel1,
        request.tel2,
        request.tel3,
        request.category,
        request.message,
    )
}

/// `POST /api/contacts`
///
/// The body is read raw regardless of content type. Invalid JSON gets a 400
/// carrying [`MALFORMED_BODY_MESSAGE`].
pub(crate) async fn create_contact(State(state): State<AppState>, body: Bytes) -> Response {
    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Rejecting malformed contact body: {}", e);
            state.metrics.record_malformed_request();
            return (
                StatusCode::BAD_REQUEST,
                Json(ConfirmationResult::new(MALFORMED_BODY_MESSAGE)),
            )
                .into_response();
        }
    };

    let request = ContactRequest::from_value(value);
    info!(
        name = %request.name,
        email = %request.email,
        tel1 = %request.tel1,
        tel2 = %request.tel2,
        tel3 = %request.tel3,
        category = %request.category,
        message = %request.message,
        "Received contact submission"
    );
    state.metrics.record_contact_received();

    (
        StatusCode::OK,
        Json(ConfirmationResult::new(confirmation_message(&request))),
    )
        .into_response()
}
