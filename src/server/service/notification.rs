//! Notification dispatch from game servers to the announcement channel.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::async_trait;

use crate::server::{
    bot::session::ChatSession,
    config::{Config, InvalidTokenPolicy},
    data::token::TokenStore,
    error::notify::NotifyError,
    model::{announcement::ChatAnnouncement, notification::NotificationEvent},
};

/// Capability the HTTP ingress dispatches validated events to.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announces an event. `Ok` means the announcement was delivered (or
    /// deliberately skipped in smoke-check mode).
    async fn notify(&self, event: NotificationEvent) -> Result<(), NotifyError>;
}

/// Dispatcher switches taken from the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifySettings {
    /// Accept valid notifications without sending anything.
    pub test_post: bool,
    pub invalid_token_policy: InvalidTokenPolicy,
}

impl From<&Config> for NotifySettings {
    fn from(config: &Config) -> Self {
        Self {
            test_post: config.test_post,
            invalid_token_policy: config.invalid_token_policy,
        }
    }
}

pub struct NotificationService {
    session: Arc<ChatSession>,
    tokens: Arc<TokenStore>,
    settings: NotifySettings,
}

impl NotificationService {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `session` - Chat session announcements are sent through
    /// - `tokens` - Allow-list of game-server tokens
    /// - `settings` - Smoke-check mode and invalid-token policy
    pub fn new(
        session: Arc<ChatSession>,
        tokens: Arc<TokenStore>,
        settings: NotifySettings,
    ) -> Self {
        Self {
            session,
            tokens,
            settings,
        }
    }

    fn reject_token(&self, event: &NotificationEvent) -> NotifyError {
        match self.settings.invalid_token_policy {
            InvalidTokenPolicy::Reject => {
                tracing::warn!(
                    "Received a notification from {} with an unknown token",
                    event.hostname
                );
                NotifyError::Unauthorized
            }
            InvalidTokenPolicy::Abort => {
                tracing::error!(
                    "Trust violation: notification from {} carries an unknown token",
                    event.hostname
                );
                NotifyError::TrustViolation
            }
        }
    }
}

#[async_trait]
impl Notifier for NotificationService {
    /// Checks readiness and the token, then posts the announcement.
    ///
    /// # Returns
    /// - `Ok(())` - Announcement sent, or skipped because `TEST_POST` is on
    /// - `Err(NotifyError::NotReady)` - The chat session is not ready
    /// - `Err(NotifyError::Unauthorized)` / `Err(NotifyError::TrustViolation)` -
    ///   Token outside the allow-list, per the configured policy
    /// - `Err(NotifyError::Chat)` - Discord failed to deliver the announcement
    async fn notify(&self, event: NotificationEvent) -> Result<(), NotifyError> {
        let Some(readiness) = self.session.readiness().await else {
            tracing::error!("Received a POST request while Discord bot is not ready!");
            return Err(NotifyError::NotReady);
        };

        if self.settings.test_post {
            tracing::info!("Testing POST. Not sending a mention.");
            return Ok(());
        }

        if !self.tokens.contains(&event.token) {
            return Err(self.reject_token(&event));
        }

        let announcement = ChatAnnouncement::render(&event, &readiness.ping_role);

        if let Err(e) = self.session.send_announcement(&announcement).await {
            tracing::error!("Error sending a mention: {}", e);
            return Err(e);
        }

        tracing::info!(
            "Announced {} for player {}",
            event.hostname,
            event.player_name
        );

        Ok(())
    }
}
