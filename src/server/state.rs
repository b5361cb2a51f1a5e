//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use std::sync::Arc;

use crate::server::service::notification::Notifier;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap; the notifier is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Dispatcher that validated notification events are handed to.
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}
