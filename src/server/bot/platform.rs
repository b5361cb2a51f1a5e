//! Chat platform capability used by the session, dispatcher and role commands.
//!
//! Everything the bridge asks of Discord goes through `ChatPlatform`, so the
//! session logic never touches Serenity's client directly. `DiscordPlatform` is
//! the production implementation backed by Serenity's HTTP client; every call
//! is bounded by the configured platform timeout.

use std::{future::Future, sync::Arc, time::Duration};

use serenity::{
    all::{Channel, ChannelId, CreateMessage, GuildId, RoleId, UserId},
    async_trait,
    http::Http,
};

use crate::server::{
    error::chat::ChatError,
    model::{
        announcement::ChatAnnouncement,
        discord::{DiscordChannel, DiscordGuildMember, PingRole},
    },
};

/// Audit log reason attached to every role grant and revoke.
const AUDIT_LOG_REASON: &str = "User requested.";

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Looks up a channel, `Ok(None)` if it does not exist.
    async fn channel(&self, channel_id: ChannelId) -> Result<Option<DiscordChannel>, ChatError>;

    /// Looks up a role within a guild, `Ok(None)` if it does not exist.
    async fn role(&self, guild_id: GuildId, role_id: RoleId)
        -> Result<Option<PingRole>, ChatError>;

    /// Reads a member's current state, `Ok(None)` if the user is not in the guild.
    async fn member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<DiscordGuildMember>, ChatError>;

    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), ChatError>;

    async fn send_announcement(
        &self,
        channel_id: ChannelId,
        announcement: &ChatAnnouncement,
    ) -> Result<(), ChatError>;

    /// Grants a role. Granting a role the member already holds is a no-op on Discord's side.
    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), ChatError>;

    /// Revokes a role. Revoking a role the member does not hold is a no-op on Discord's side.
    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), ChatError>;
}

/// `ChatPlatform` backed by Serenity's HTTP client.
pub struct DiscordPlatform {
    http: Arc<Http>,
    timeout: Duration,
}

impl DiscordPlatform {
    /// Creates a new DiscordPlatform instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client shared with the gateway client
    /// - `timeout` - Upper bound for every Discord API call
    pub fn new(http: Arc<Http>, timeout: Duration) -> Self {
        Self { http, timeout }
    }

    async fn bounded<T, F>(&self, request: F) -> Result<T, ChatError>
    where
        F: Future<Output = serenity::Result<T>>,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result.map_err(ChatError::from),
            Err(_) => Err(ChatError::Timeout(self.timeout)),
        }
    }

    /// Maps a 404 from Discord to `Ok(None)`.
    async fn optional<T, F>(&self, request: F) -> Result<Option<T>, ChatError>
    where
        F: Future<Output = serenity::Result<T>>,
    {
        match self.bounded(request).await {
            Ok(value) => Ok(Some(value)),
            Err(ChatError::Discord(err)) if is_not_found(&err) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl ChatPlatform for DiscordPlatform {
    async fn channel(&self, channel_id: ChannelId) -> Result<Option<DiscordChannel>, ChatError> {
        let channel = self.optional(self.http.get_channel(channel_id)).await?;

        Ok(channel.map(|channel| match channel {
            Channel::Guild(guild_channel) => DiscordChannel::from(&guild_channel),
            _ => DiscordChannel::private(channel_id),
        }))
    }

    async fn role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<Option<PingRole>, ChatError> {
        let roles = self.bounded(self.http.get_guild_roles(guild_id)).await?;

        Ok(roles
            .iter()
            .find(|role| role.id == role_id)
            .map(PingRole::from))
    }

    async fn member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<DiscordGuildMember>, ChatError> {
        let member = self.optional(self.http.get_member(guild_id, user_id)).await?;

        Ok(member.as_ref().map(DiscordGuildMember::from))
    }

    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), ChatError> {
        let message = CreateMessage::new().content(content);

        self.bounded(channel_id.send_message(&self.http, message))
            .await?;

        Ok(())
    }

    async fn send_announcement(
        &self,
        channel_id: ChannelId,
        announcement: &ChatAnnouncement,
    ) -> Result<(), ChatError> {
        self.bounded(channel_id.send_message(&self.http, announcement.to_message()))
            .await?;

        Ok(())
    }

    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), ChatError> {
        self.bounded(
            self.http
                .add_member_role(guild_id, user_id, role_id, Some(AUDIT_LOG_REASON)),
        )
        .await
    }

    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), ChatError> {
        self.bounded(
            self.http
                .remove_member_role(guild_id, user_id, role_id, Some(AUDIT_LOG_REASON)),
        )
        .await
    }
}

fn is_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(http_err) => http_err
            .status_code()
            .is_some_and(|status| status.as_u16() == 404),
        _ => false,
    }
}
