use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use dioxus_logger::tracing;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    model::api::NotifyResponseDto,
    server::{
        controller::{
            get_openapi,
            notify::{get_greeting, post_notification},
            OPENAPI_PATH,
        },
        state::AppState,
    },
};

/// Builds the ingress router.
///
/// # Arguments
/// - `test_get` - Also route the diagnostic `GET /` and the OpenAPI document
pub fn router(test_get: bool) -> Router<AppState> {
    let mut root = post(post_notification);
    let mut routes = Router::new();
    if test_get {
        root = root.get(get_greeting);
        routes = routes.route(OPENAPI_PATH, get(get_openapi));
        tracing::info!("Added test GET handler.");
    }

    routes
        .route("/", root)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Turns a panic inside a handler into an ordinary failure response.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!("Unexpected error while handling a request: {}", detail);

    (
        StatusCode::BAD_REQUEST,
        Json(NotifyResponseDto { success: false }),
    )
        .into_response()
}
