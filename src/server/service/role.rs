//! Ping role self-service for chat users.
//!
//! `!add` grants the ping role and `!remove` revokes it. Each command reads the
//! member fresh from Discord right before deciding, so a member who already has
//! the requested state gets a short reply and no mutation. Commands for the same
//! member are serialized with a per-member lock, which keeps the read-then-act
//! sequence from interleaving when the same user fires commands in quick
//! succession on the multi-threaded runtime.

use std::sync::Arc;

use dashmap::DashMap;
use dioxus_logger::tracing;
use serenity::all::{ChannelId, UserId};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::server::{
    bot::{platform::ChatPlatform, session::Readiness},
    model::discord::DiscordGuildMember,
};

/// Prefix every chat command starts with.
pub const COMMAND_PREFIX: char = '!';

/// Recognized chat commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCommand {
    Add,
    Remove,
}

impl RoleCommand {
    /// Parses message content. Matching is exact and case-sensitive.
    ///
    /// # Returns
    /// - `Some(RoleCommand)` - Content is `!add` or `!remove`
    /// - `None` - Empty content, no prefix, or an unknown command
    pub fn parse(content: &str) -> Option<Self> {
        match content.strip_prefix(COMMAND_PREFIX)? {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }
}

/// What a role command ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCommandOutcome {
    /// The author is not a member of the configured guild; nothing was sent.
    NotMember,
    /// The member could not be read from Discord; nothing was sent.
    LookupFailed,
    AlreadyHeld,
    Granted,
    GrantFailed,
    NotHeld,
    Revoked,
    RevokeFailed,
}

/// Per-member async locks.
///
/// An entry lives only while a command for that member holds or waits for it.
#[derive(Default)]
pub struct MemberLocks {
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl MemberLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other command for `user_id` is in flight.
    pub async fn lock(&self, user_id: UserId) -> MemberGuard<'_> {
        let lock = self.locks.entry(user_id).or_default().clone();

        MemberGuard {
            locks: &self.locks,
            user_id,
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Number of members with a command in flight.
    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.locks.len()
    }
}

/// Held while a command for one member runs.
pub struct MemberGuard<'a> {
    locks: &'a DashMap<UserId, Arc<Mutex<()>>>,
    user_id: UserId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for MemberGuard<'_> {
    fn drop(&mut self) {
        // Release first so only the map's reference remains when nobody waits.
        self.guard.take();
        self.locks
            .remove_if(&self.user_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

pub struct PingRoleService<'a> {
    readiness: &'a Readiness,
    locks: &'a MemberLocks,
}

impl<'a> PingRoleService<'a> {
    pub fn new(readiness: &'a Readiness, locks: &'a MemberLocks) -> Self {
        Self { readiness, locks }
    }

    /// Runs a role command for a user and replies in the channel it came from.
    ///
    /// Users who are not members of the configured guild are ignored without a
    /// reply. Platform failures are logged and reported to the user; they are
    /// never returned to the caller.
    ///
    /// # Arguments
    /// - `command` - Parsed command
    /// - `user_id` - Author of the command message
    /// - `reply_channel` - Channel the command was sent in (guild channel or DM)
    ///
    /// # Returns
    /// - `RoleCommandOutcome` describing what happened
    pub async fn execute(
        &self,
        command: RoleCommand,
        user_id: UserId,
        reply_channel: ChannelId,
    ) -> RoleCommandOutcome {
        let _guard = self.locks.lock(user_id).await;

        let member = match self
            .platform()
            .member(self.readiness.guild_id, user_id)
            .await
        {
            Ok(Some(member)) => member,
            Ok(None) => return RoleCommandOutcome::NotMember,
            Err(e) => {
                tracing::warn!("Failed to read member {}: {}", user_id, e);
                return RoleCommandOutcome::LookupFailed;
            }
        };

        match command {
            RoleCommand::Add => self.add(&member, reply_channel).await,
            RoleCommand::Remove => self.remove(&member, reply_channel).await,
        }
    }

    /// Grants the ping role unless the member already holds it.
    pub async fn add(
        &self,
        member: &DiscordGuildMember,
        reply_channel: ChannelId,
    ) -> RoleCommandOutcome {
        let role = &self.readiness.ping_role;

        if member.has_role(role.role_id) {
            self.reply(
                reply_channel,
                &format!("{} You already have role {}!", member.mention(), role.name),
            )
            .await;
            return RoleCommandOutcome::AlreadyHeld;
        }

        tracing::info!("Adding ping role to user {}!", member.display_name);

        match self
            .platform()
            .grant_role(self.readiness.guild_id, member.user_id, role.role_id)
            .await
        {
            Ok(()) => {
                self.reply(
                    reply_channel,
                    &format!("{} Added role {}.", member.mention(), role.name),
                )
                .await;
                RoleCommandOutcome::Granted
            }
            Err(e) => {
                tracing::error!("Error adding a ping role: {}", e);
                self.reply(
                    reply_channel,
                    &format!(
                        "{} Failed to add role {}. Check log.",
                        member.mention(),
                        role.name
                    ),
                )
                .await;
                RoleCommandOutcome::GrantFailed
            }
        }
    }

    /// Revokes the ping role unless the member does not hold it.
    pub async fn remove(
        &self,
        member: &DiscordGuildMember,
        reply_channel: ChannelId,
    ) -> RoleCommandOutcome {
        let role = &self.readiness.ping_role;

        if !member.has_role(role.role_id) {
            self.reply(
                reply_channel,
                &format!("{} You don't have role {}!", member.mention(), role.name),
            )
            .await;
            return RoleCommandOutcome::NotHeld;
        }

        tracing::info!("Removing role from user {}!", member.display_name);

        match self
            .platform()
            .revoke_role(self.readiness.guild_id, member.user_id, role.role_id)
            .await
        {
            Ok(()) => {
                self.reply(
                    reply_channel,
                    &format!("{} Removed role {}.", member.mention(), role.name),
                )
                .await;
                RoleCommandOutcome::Revoked
            }
            Err(e) => {
                tracing::error!("Error removing a ping role: {}", e);
                self.reply(
                    reply_channel,
                    &format!(
                        "{} Failed to remove role {}. Check log.",
                        member.mention(),
                        role.name
                    ),
                )
                .await;
                RoleCommandOutcome::RevokeFailed
            }
        }
    }

    fn platform(&self) -> &dyn ChatPlatform {
        self.readiness.platform.as_ref()
    }

    /// Best-effort reply: a failure is logged and otherwise ignored.
    async fn reply(&self, channel_id: ChannelId, content: &str) {
        if let Err(e) = self.platform().send_text(channel_id, content).await {
            tracing::error!("Error sending a channel message: {}", e);
        }
    }
}
