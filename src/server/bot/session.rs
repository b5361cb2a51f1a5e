//! Chat session state and command routing.
//!
//! The session moves through three states. It starts in `Init` while the gateway
//! connects. On the first ready event it resolves the configured channel, its
//! guild, and the ping role; success moves it to `Ready`, any failure moves it
//! to `Terminated`, which is final, keeps the failure, and makes the process exit. Notifications and
//! chat commands are only handled while `Ready`.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{ChannelId, GuildId, RoleId, UserId};
use tokio::sync::{Notify, RwLock};

use crate::server::{
    bot::platform::ChatPlatform,
    config::Config,
    error::{chat::ChatError, notify::NotifyError, readiness::ReadinessError},
    model::{
        announcement::ChatAnnouncement,
        discord::{InboundMessage, PingRole},
    },
    service::role::{
        MemberLocks, PingRoleService, RoleCommand, RoleCommandOutcome, COMMAND_PREFIX,
    },
};

/// IDs the session resolves when the gateway becomes ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub channel_id: ChannelId,
    pub ping_role_id: RoleId,
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            channel_id: ChannelId::new(config.channel_id),
            ping_role_id: RoleId::new(config.ping_role_id),
        }
    }
}

/// Everything resolved during the startup handshake.
///
/// Created once and shared by reference with the dispatcher and role commands.
pub struct Readiness {
    /// The bot's own user, whose messages are never treated as commands.
    pub bot_user_id: UserId,
    pub channel_id: ChannelId,
    pub guild_id: GuildId,
    pub ping_role: PingRole,
    pub platform: Arc<dyn ChatPlatform>,
}

impl Readiness {
    pub async fn send_announcement(&self, announcement: &ChatAnnouncement) -> Result<(), ChatError> {
        self.platform
            .send_announcement(self.channel_id, announcement)
            .await
    }
}

enum SessionState {
    Init,
    Ready(Arc<Readiness>),
    Terminated(ReadinessError),
}

pub struct ChatSession {
    settings: SessionSettings,
    state: RwLock<SessionState>,
    terminated: Notify,
    member_locks: MemberLocks,
}

impl ChatSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            state: RwLock::new(SessionState::Init),
            terminated: Notify::new(),
            member_locks: MemberLocks::new(),
        }
    }

    /// Handles the gateway ready event.
    ///
    /// Only the first ready event resolves anything; later ones (reconnects) keep
    /// the existing readiness.
    ///
    /// # Arguments
    /// - `bot_user_id` - The bot's own user ID
    /// - `platform` - Platform handle used for resolution and all later calls
    ///
    /// # Returns
    /// - `Ok(())` - The session is ready
    /// - `Err(ReadinessError)` - Resolution failed and the session is terminated
    pub async fn on_ready(
        &self,
        bot_user_id: UserId,
        platform: Arc<dyn ChatPlatform>,
    ) -> Result<(), ReadinessError> {
        match *self.state.read().await {
            SessionState::Init => {}
            SessionState::Ready(_) => {
                tracing::debug!("Received ready event while already ready, keeping state");
                return Ok(());
            }
            SessionState::Terminated(_) => {
                tracing::debug!("Received ready event after termination, ignoring");
                return Ok(());
            }
        }

        // Resolve without holding the state lock; readers keep seeing `Init`.
        let resolved = self.resolve(bot_user_id, platform).await;

        let mut state = self.state.write().await;
        if !matches!(*state, SessionState::Init) {
            tracing::debug!("Another ready event settled the session first, keeping state");
            return Ok(());
        }

        match resolved {
            Ok(readiness) => {
                tracing::info!(
                    "Ready: announcing in channel {} of guild {} with role {}",
                    readiness.channel_id,
                    readiness.guild_id,
                    readiness.ping_role.name
                );
                *state = SessionState::Ready(Arc::new(readiness));
                Ok(())
            }
            Err(e) => {
                tracing::error!("{}", e);
                *state = SessionState::Terminated(e.clone());
                self.terminated.notify_one();
                Err(e)
            }
        }
    }

    async fn resolve(
        &self,
        bot_user_id: UserId,
        platform: Arc<dyn ChatPlatform>,
    ) -> Result<Readiness, ReadinessError> {
        let channel_id = self.settings.channel_id;
        let role_id = self.settings.ping_role_id;

        let channel = platform
            .channel(channel_id)
            .await?
            .ok_or(ReadinessError::ChannelNotFound(channel_id.get()))?;

        let guild_id = match channel.guild_id {
            Some(guild_id) if channel.text_capable => guild_id,
            _ => return Err(ReadinessError::NotTextChannel(channel_id.get())),
        };

        let ping_role = platform
            .role(guild_id, role_id)
            .await?
            .ok_or(ReadinessError::RoleNotFound(role_id.get()))?;

        Ok(Readiness {
            bot_user_id,
            channel_id,
            guild_id,
            ping_role,
            platform,
        })
    }

    /// The resolved readiness, `None` unless the session is ready.
    pub async fn readiness(&self) -> Option<Arc<Readiness>> {
        match &*self.state.read().await {
            SessionState::Ready(readiness) => Some(Arc::clone(readiness)),
            SessionState::Init | SessionState::Terminated(_) => None,
        }
    }

    #[cfg(test)]
    pub async fn is_terminated(&self) -> bool {
        matches!(*self.state.read().await, SessionState::Terminated(_))
    }

    /// Completes once the session has terminated, yielding the failure that
    /// caused it. Meant for a single waiter.
    pub async fn wait_terminated(&self) -> ReadinessError {
        loop {
            self.terminated.notified().await;
            if let SessionState::Terminated(e) = &*self.state.read().await {
                return e.clone();
            }
        }
    }

    /// Sends an announcement to the configured channel.
    pub async fn send_announcement(
        &self,
        announcement: &ChatAnnouncement,
    ) -> Result<(), NotifyError> {
        let readiness = self.readiness().await.ok_or(NotifyError::NotReady)?;

        Ok(readiness.send_announcement(announcement).await?)
    }

    /// Routes an inbound chat message to the role commands.
    ///
    /// A message is handled only when the session is ready, the content is a
    /// known command, the author is not the bot itself, and it was sent in the
    /// configured channel or a direct message. Guild membership of the author is
    /// checked by the command itself when it reads the member.
    ///
    /// # Returns
    /// - `Some(RoleCommandOutcome)` - A command was run
    /// - `None` - The message was ignored
    pub async fn on_message(&self, message: InboundMessage) -> Option<RoleCommandOutcome> {
        let Some(readiness) = self.readiness().await else {
            tracing::debug!("Received message but bot is not ready yet.");
            return None;
        };

        if !message.content.starts_with(COMMAND_PREFIX) {
            return None;
        }
        if message.author_id == readiness.bot_user_id {
            return None;
        }
        if message.channel_id != readiness.channel_id && !message.is_direct {
            return None;
        }
        let command = RoleCommand::parse(&message.content)?;

        let outcome = PingRoleService::new(&readiness, &self.member_locks)
            .execute(command, message.author_id, message.channel_id)
            .await;

        tracing::debug!(
            "Command {:?} from {} finished with {:?}",
            command,
            message.author_id,
            outcome
        );

        Some(outcome)
    }
}
