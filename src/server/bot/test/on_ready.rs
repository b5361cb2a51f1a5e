use super::*;
use crate::server::error::{notify::NotifyError, readiness::ReadinessError};

/// Tests resolving the channel, guild and role on the first ready event.
///
/// Expected: Ok with readiness exposing the configured IDs and role name
#[tokio::test]
async fn resolves_channel_and_role() {
    let platform = Arc::new(MockPlatform::new());
    let session = ChatSession::new(settings());

    assert!(session.readiness().await.is_none());

    let result = session.on_ready(UserId::new(BOT_USER_ID), platform).await;

    assert!(result.is_ok());
    let readiness = session.readiness().await.unwrap();
    assert_eq!(readiness.bot_user_id, UserId::new(BOT_USER_ID));
    assert_eq!(readiness.channel_id, ChannelId::new(CHANNEL_ID));
    assert_eq!(readiness.guild_id, GuildId::new(GUILD_ID));
    assert_eq!(readiness.ping_role.role_id, RoleId::new(PING_ROLE_ID));
    assert_eq!(readiness.ping_role.name, PING_ROLE_NAME);
    assert!(!session.is_terminated().await);
}

/// Tests a missing channel terminating the session.
///
/// Expected: Err(ChannelNotFound) and terminated state
#[tokio::test]
async fn terminates_when_channel_missing() {
    let platform = Arc::new(MockPlatform::new().without_channel());
    let session = ChatSession::new(settings());

    let result = session.on_ready(UserId::new(BOT_USER_ID), platform).await;

    assert!(matches!(result, Err(ReadinessError::ChannelNotFound(id)) if id == CHANNEL_ID));
    assert!(session.readiness().await.is_none());
    assert!(session.is_terminated().await);
}

/// Tests a non-text guild channel terminating the session.
///
/// Expected: Err(NotTextChannel)
#[tokio::test]
async fn terminates_when_channel_not_text() {
    let platform = Arc::new(MockPlatform::new().with_voice_channel());
    let session = ChatSession::new(settings());

    let result = session.on_ready(UserId::new(BOT_USER_ID), platform).await;

    assert!(matches!(result, Err(ReadinessError::NotTextChannel(id)) if id == CHANNEL_ID));
    assert!(session.is_terminated().await);
}

/// Tests a channel outside any guild terminating the session.
///
/// Expected: Err(NotTextChannel)
#[tokio::test]
async fn terminates_when_channel_has_no_guild() {
    let platform = Arc::new(MockPlatform::new().with_private_channel());
    let session = ChatSession::new(settings());

    let result = session.on_ready(UserId::new(BOT_USER_ID), platform).await;

    assert!(matches!(result, Err(ReadinessError::NotTextChannel(_))));
    assert!(session.is_terminated().await);
}

/// Tests a missing role terminating the session.
///
/// Expected: Err(RoleNotFound)
#[tokio::test]
async fn terminates_when_role_missing() {
    let platform = Arc::new(MockPlatform::new().without_role());
    let session = ChatSession::new(settings());

    let result = session.on_ready(UserId::new(BOT_USER_ID), platform).await;

    assert!(matches!(result, Err(ReadinessError::RoleNotFound(id)) if id == PING_ROLE_ID));
    assert!(session.is_terminated().await);
}

/// Tests a platform failure during resolution terminating the session.
///
/// Expected: Err(Lookup)
#[tokio::test]
async fn terminates_when_lookup_fails() {
    let platform = Arc::new(MockPlatform::new());
    platform.fail_lookups(true);
    let session = ChatSession::new(settings());

    let result = session.on_ready(UserId::new(BOT_USER_ID), platform).await;

    assert!(matches!(result, Err(ReadinessError::Lookup(_))));
    assert!(session.is_terminated().await);
}

/// Tests that a termination wakes the waiter even when it starts waiting later.
///
/// Expected: wait_terminated yields the resolution failure
#[tokio::test]
async fn signals_termination() {
    let platform = Arc::new(MockPlatform::new().without_role());
    let session = ChatSession::new(settings());

    let _ = session.on_ready(UserId::new(BOT_USER_ID), platform).await;

    let failure = tokio::time::timeout(Duration::from_secs(1), session.wait_terminated())
        .await
        .expect("termination was not signalled");

    assert_eq!(failure, ReadinessError::RoleNotFound(PING_ROLE_ID));
}

/// Tests that slow resolution does not block readers of the session state.
///
/// Expected: readiness answers None promptly while resolving, Some afterwards
#[tokio::test]
async fn readers_are_not_blocked_while_resolving() {
    let platform = Arc::new(MockPlatform::new().with_lookup_delay(Duration::from_millis(500)));
    let session = Arc::new(ChatSession::new(settings()));

    let resolving = {
        let session = session.clone();
        tokio::spawn(async move { session.on_ready(UserId::new(BOT_USER_ID), platform).await })
    };
    tokio::task::yield_now().await;

    let readiness = tokio::time::timeout(Duration::from_millis(100), session.readiness())
        .await
        .expect("readiness blocked while resolving");
    assert!(readiness.is_none());

    assert!(resolving.await.unwrap().is_ok());
    assert!(session.readiness().await.is_some());
}

/// Tests that a reconnect keeps the first readiness.
///
/// Verifies that a second ready event neither re-resolves nor replaces the
/// readiness, even when the second platform could not resolve anything.
///
/// Expected: Ok with the original readiness kept
#[tokio::test]
async fn second_ready_keeps_state() {
    let platform = Arc::new(MockPlatform::new());
    let session = ready_session(platform.clone()).await;

    let broken = Arc::new(MockPlatform::new().without_channel().without_role());
    let result = session.on_ready(UserId::new(BOT_USER_ID), broken).await;

    assert!(result.is_ok());
    assert!(!session.is_terminated().await);
    let readiness = session.readiness().await.unwrap();
    assert_eq!(readiness.ping_role.name, PING_ROLE_NAME);
}

/// Tests sending an announcement before the session is ready.
///
/// Expected: Err(NotReady)
#[tokio::test]
async fn announcement_requires_readiness() {
    let session = ChatSession::new(settings());
    let announcement = ChatAnnouncement {
        content: "content".to_string(),
        title: "title".to_string(),
        description: "description".to_string(),
        color: 0,
        ping_role: PingRole {
            role_id: RoleId::new(PING_ROLE_ID),
            name: PING_ROLE_NAME.to_string(),
        },
    };

    let result = session.send_announcement(&announcement).await;

    assert!(matches!(result, Err(NotifyError::NotReady)));
}
