use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::NotifyResponseDto,
    server::error::{chat::ChatError, payload::PayloadError},
};

/// Why a notification was not delivered.
///
/// `Unauthorized` and `TrustViolation` are kept apart from the generic failure
/// cases so that an untrusted sender is never indistinguishable from a broken
/// game server or a Discord outage.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The request body is not a valid notification.
    #[error("Invalid notification payload: {0}")]
    Payload(#[from] PayloadError),

    /// The chat session has not resolved its channel and role yet.
    #[error("Received a notification while Discord bot is not ready")]
    NotReady,

    /// Token outside the allow-list under the `reject` policy.
    #[error("Notification token is not in the allow-list")]
    Unauthorized,

    /// Token outside the allow-list under the `abort` policy.
    #[error("Trust violation: notification token is not in the allow-list")]
    TrustViolation,

    /// Discord refused or failed to deliver the announcement.
    #[error("Failed to send announcement: {0}")]
    Chat(#[from] ChatError),
}

/// Converts notification errors into HTTP responses.
///
/// The body is always `{"success": false}`; only the status varies.
///
/// # Returns
/// - 403 Forbidden - For `TrustViolation`
/// - 400 Bad Request - For every other variant
impl IntoResponse for NotifyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::TrustViolation => StatusCode::FORBIDDEN,
            Self::Payload(_) | Self::NotReady | Self::Unauthorized | Self::Chat(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        (status, Json(NotifyResponseDto { success: false })).into_response()
    }
}
