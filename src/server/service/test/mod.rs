use std::sync::Arc;

use serenity::all::{ChannelId, UserId};
use test_utils::builder::NotifyBodyBuilder;

use crate::server::{
    bot::{
        session::ChatSession,
        test::{
            ready_session, settings, MockPlatform, CHANNEL_ID, DM_CHANNEL_ID, PING_ROLE_ID,
            USER_ID,
        },
    },
    config::InvalidTokenPolicy,
    data::token::TokenStore,
    error::notify::NotifyError,
    model::notification::NotificationEvent,
    service::{
        notification::{NotificationService, Notifier, NotifySettings},
        role::{PingRoleService, RoleCommand, RoleCommandOutcome},
    },
};
