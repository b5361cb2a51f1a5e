//! Recording chat platform double and session tests.
//!
//! `MockPlatform` keeps an in-memory guild with one announcement channel and
//! one ping role. Role grants and revokes mutate the stored members, so a
//! follow-up member read observes the change the way Discord would.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use serenity::{
    all::{ChannelId, GuildId, RoleId, UserId},
    async_trait,
};

use crate::server::{
    bot::{
        platform::ChatPlatform,
        session::{ChatSession, SessionSettings},
    },
    error::chat::ChatError,
    model::{
        announcement::ChatAnnouncement,
        discord::{DiscordChannel, DiscordGuildMember, InboundMessage, PingRole},
    },
};

mod on_ready;

pub const GUILD_ID: u64 = 111111111111111111;
pub const PING_ROLE_ID: u64 = 222222222222222222;
pub const CHANNEL_ID: u64 = 444444444444444444;
pub const OTHER_CHANNEL_ID: u64 = 555555555555555555;
pub const DM_CHANNEL_ID: u64 = 666666666666666666;
pub const BOT_USER_ID: u64 = 777777777777777777;
pub const USER_ID: u64 = 333333333333333333;
pub const PING_ROLE_NAME: &str = "Looking to Play";

/// In-memory `ChatPlatform` that records every outbound call.
pub struct MockPlatform {
    channel: Option<DiscordChannel>,
    role: Option<PingRole>,
    members: Mutex<HashMap<UserId, DiscordGuildMember>>,
    texts: Mutex<Vec<(ChannelId, String)>>,
    announcements: Mutex<Vec<(ChannelId, ChatAnnouncement)>>,
    member_reads: AtomicUsize,
    grants: AtomicUsize,
    revokes: AtomicUsize,
    fail_lookups: AtomicBool,
    fail_sends: AtomicBool,
    fail_role_changes: AtomicBool,
    member_read_delay: Duration,
    lookup_delay: Duration,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatform {
    /// Platform with a text channel and the ping role, but no members.
    pub fn new() -> Self {
        Self {
            channel: Some(DiscordChannel {
                channel_id: ChannelId::new(CHANNEL_ID),
                guild_id: Some(GuildId::new(GUILD_ID)),
                text_capable: true,
            }),
            role: Some(PingRole {
                role_id: RoleId::new(PING_ROLE_ID),
                name: PING_ROLE_NAME.to_string(),
            }),
            members: Mutex::new(HashMap::new()),
            texts: Mutex::new(Vec::new()),
            announcements: Mutex::new(Vec::new()),
            member_reads: AtomicUsize::new(0),
            grants: AtomicUsize::new(0),
            revokes: AtomicUsize::new(0),
            fail_lookups: AtomicBool::new(false),
            fail_sends: AtomicBool::new(false),
            fail_role_changes: AtomicBool::new(false),
            member_read_delay: Duration::ZERO,
            lookup_delay: Duration::ZERO,
        }
    }

    pub fn without_channel(mut self) -> Self {
        self.channel = None;
        self
    }

    pub fn with_voice_channel(mut self) -> Self {
        if let Some(channel) = self.channel.as_mut() {
            channel.text_capable = false;
        }
        self
    }

    pub fn with_private_channel(mut self) -> Self {
        self.channel = Some(DiscordChannel::private(ChannelId::new(CHANNEL_ID)));
        self
    }

    pub fn without_role(mut self) -> Self {
        self.role = None;
        self
    }

    /// Adds a guild member holding the given roles.
    pub fn with_member(self, user_id: u64, roles: &[u64]) -> Self {
        let member = DiscordGuildMember {
            user_id: UserId::new(user_id),
            display_name: format!("user-{}", user_id),
            roles: roles.iter().copied().map(RoleId::new).collect(),
        };
        self.members
            .lock()
            .unwrap()
            .insert(member.user_id, member);
        self
    }

    /// Delays every member read, widening the window between read and mutation.
    pub fn with_member_read_delay(mut self, delay: Duration) -> Self {
        self.member_read_delay = delay;
        self
    }

    /// Delays the channel lookup made while the session resolves readiness.
    pub fn with_lookup_delay(mut self, delay: Duration) -> Self {
        self.lookup_delay = delay;
        self
    }

    pub fn fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn fail_role_changes(&self, fail: bool) {
        self.fail_role_changes.store(fail, Ordering::SeqCst);
    }

    pub fn texts(&self) -> Vec<(ChannelId, String)> {
        self.texts.lock().unwrap().clone()
    }

    pub fn announcements(&self) -> Vec<(ChannelId, ChatAnnouncement)> {
        self.announcements.lock().unwrap().clone()
    }

    pub fn member_reads(&self) -> usize {
        self.member_reads.load(Ordering::SeqCst)
    }

    pub fn grants(&self) -> usize {
        self.grants.load(Ordering::SeqCst)
    }

    pub fn revokes(&self) -> usize {
        self.revokes.load(Ordering::SeqCst)
    }

    pub fn member_has_ping_role(&self, user_id: u64) -> bool {
        self.members
            .lock()
            .unwrap()
            .get(&UserId::new(user_id))
            .is_some_and(|member| member.has_role(RoleId::new(PING_ROLE_ID)))
    }

    fn platform_error() -> ChatError {
        ChatError::Timeout(Duration::from_secs(10))
    }
}

#[async_trait]
impl ChatPlatform for MockPlatform {
    async fn channel(&self, channel_id: ChannelId) -> Result<Option<DiscordChannel>, ChatError> {
        if !self.lookup_delay.is_zero() {
            tokio::time::sleep(self.lookup_delay).await;
        }
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(Self::platform_error());
        }

        Ok(self
            .channel
            .clone()
            .filter(|channel| channel.channel_id == channel_id))
    }

    async fn role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<Option<PingRole>, ChatError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(Self::platform_error());
        }

        Ok(self
            .role
            .clone()
            .filter(|role| guild_id.get() == GUILD_ID && role.role_id == role_id))
    }

    async fn member(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<DiscordGuildMember>, ChatError> {
        self.member_reads.fetch_add(1, Ordering::SeqCst);
        if !self.member_read_delay.is_zero() {
            tokio::time::sleep(self.member_read_delay).await;
        }
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(Self::platform_error());
        }

        Ok(self.members.lock().unwrap().get(&user_id).cloned())
    }

    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), ChatError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(Self::platform_error());
        }

        self.texts
            .lock()
            .unwrap()
            .push((channel_id, content.to_string()));
        Ok(())
    }

    async fn send_announcement(
        &self,
        channel_id: ChannelId,
        announcement: &ChatAnnouncement,
    ) -> Result<(), ChatError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(Self::platform_error());
        }

        self.announcements
            .lock()
            .unwrap()
            .push((channel_id, announcement.clone()));
        Ok(())
    }

    async fn grant_role(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), ChatError> {
        if self.fail_role_changes.load(Ordering::SeqCst) {
            return Err(Self::platform_error());
        }

        self.grants.fetch_add(1, Ordering::SeqCst);
        if let Some(member) = self.members.lock().unwrap().get_mut(&user_id) {
            if !member.roles.contains(&role_id) {
                member.roles.push(role_id);
            }
        }
        Ok(())
    }

    async fn revoke_role(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), ChatError> {
        if self.fail_role_changes.load(Ordering::SeqCst) {
            return Err(Self::platform_error());
        }

        self.revokes.fetch_add(1, Ordering::SeqCst);
        if let Some(member) = self.members.lock().unwrap().get_mut(&user_id) {
            member.roles.retain(|role| *role != role_id);
        }
        Ok(())
    }
}

pub fn settings() -> SessionSettings {
    SessionSettings {
        channel_id: ChannelId::new(CHANNEL_ID),
        ping_role_id: RoleId::new(PING_ROLE_ID),
    }
}

/// Session that has completed the ready handshake against `platform`.
pub async fn ready_session(platform: Arc<MockPlatform>) -> Arc<ChatSession> {
    let session = Arc::new(ChatSession::new(settings()));
    session
        .on_ready(UserId::new(BOT_USER_ID), platform)
        .await
        .unwrap();
    session
}

/// Message in the announcement channel.
pub fn channel_message(author_id: u64, content: &str) -> InboundMessage {
    InboundMessage {
        author_id: UserId::new(author_id),
        channel_id: ChannelId::new(CHANNEL_ID),
        is_direct: false,
        content: content.to_string(),
    }
}

/// Direct message to the bot.
pub fn direct_message(author_id: u64, content: &str) -> InboundMessage {
    InboundMessage {
        author_id: UserId::new(author_id),
        channel_id: ChannelId::new(DM_CHANNEL_ID),
        is_direct: true,
        content: content.to_string(),
    }
}
