//! HTTP request handlers for the game-server ingress.
//!
//! Controllers parse untrusted request bodies into domain events, hand them to
//! the notification service and map the outcome to the `{"success": bool}`
//! response contract. `ApiDoc` collects the OpenAPI description of every route
//! and is served next to the diagnostic greeting.

use axum::Json;
use utoipa::OpenApi;

use crate::model::api::{GreetingDto, NotifyRequestDto, NotifyResponseDto};

pub mod notify;

#[cfg(test)]
mod test;

#[derive(OpenApi)]
#[openapi(
    paths(notify::post_notification, notify::get_greeting),
    components(schemas(NotifyRequestDto, NotifyResponseDto, GreetingDto)),
    tags((name = "notify", description = "Game server notifications"))
)]
pub struct ApiDoc;

/// Path the OpenAPI document is served on when diagnostics are enabled.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// GET /openapi.json - The OpenAPI description of the ingress
pub async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
