use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use serenity::async_trait;
use test_utils::builder::NotifyBodyBuilder;
use tower::ServiceExt;

use crate::server::{
    error::{chat::ChatError, notify::NotifyError},
    model::notification::NotificationEvent,
    router::router,
    service::notification::Notifier,
    state::AppState,
};


/// How the stub notifier answers.
#[derive(Clone, Copy)]
enum Reply {
    Success,
    NotReady,
    Unauthorized,
    TrustViolation,
    ChatFailure,
    Panic,
}

/// Notifier double recording every event it receives.
struct StubNotifier {
    reply: Reply,
    calls: AtomicUsize,
    events: Mutex<Vec<NotificationEvent>>,
}

impl StubNotifier {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            events: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn events(&self) -> Vec<NotificationEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for StubNotifier {
    async fn notify(&self, event: NotificationEvent) -> Result<(), NotifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().push(event);

        match self.reply {
            Reply::Success => Ok(()),
            Reply::NotReady => Err(NotifyError::NotReady),
            Reply::Unauthorized => Err(NotifyError::Unauthorized),
            Reply::TrustViolation => Err(NotifyError::TrustViolation),
            Reply::ChatFailure => Err(NotifyError::Chat(ChatError::Timeout(
                std::time::Duration::from_secs(10),
            ))),
            Reply::Panic => panic!("notifier exploded"),
        }
    }
}

fn app(notifier: Arc<StubNotifier>, test_get: bool) -> Router {
    router(test_get).with_state(AppState::new(notifier))
}

async fn send(app: Router, method: Method, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri("/")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

async fn post(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    send(app, Method::POST, body).await
}
