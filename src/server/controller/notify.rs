use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;

use crate::{
    model::api::{GreetingDto, NotifyRequestDto, NotifyResponseDto},
    server::{error::notify::NotifyError, model::notification::NotificationEvent, state::AppState},
};

pub static NOTIFY_TAG: &str = "notify";

/// POST / - Announce that a game server is looking for players
///
/// The body is parsed leniently (see `NotificationEvent`), so it is taken as raw
/// bytes rather than through the `Json` extractor. A body that fails to parse
/// never reaches the notification service.
///
/// # Returns
/// - `200 OK`: `{"success": true}`, the announcement was sent
/// - `400 Bad Request`: `{"success": false}`, invalid body or failed notification
/// - `403 Forbidden`: `{"success": false}`, unknown token under the abort policy
#[utoipa::path(
    post,
    path = "/",
    tag = NOTIFY_TAG,
    request_body = NotifyRequestDto,
    responses(
        (status = 200, description = "Announcement sent", body = NotifyResponseDto),
        (status = 400, description = "Invalid body or notification failed", body = NotifyResponseDto),
        (status = 403, description = "Unknown token under the abort policy", body = NotifyResponseDto)
    ),
)]
pub async fn post_notification(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, NotifyError> {
    let event = NotificationEvent::from_slice(&body).inspect_err(|e| {
        tracing::error!("Error occurred when parsing json from request: {}", e);
        tracing::error!("Body: {}", String::from_utf8_lossy(&body));
    })?;

    state.notifier.notify(event).await?;

    Ok((StatusCode::OK, Json(NotifyResponseDto { success: true })))
}

/// GET / - Diagnostic greeting
///
/// Only routed when `TEST_GET` is enabled.
#[utoipa::path(
    get,
    path = "/",
    tag = NOTIFY_TAG,
    responses(
        (status = 200, description = "Listener is up", body = GreetingDto)
    ),
)]
pub async fn get_greeting() -> impl IntoResponse {
    tracing::info!("Received test GET request!");

    (
        StatusCode::OK,
        Json(GreetingDto {
            message: "Hello!".to_string(),
        }),
    )
}
