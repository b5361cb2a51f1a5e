use std::{sync::Arc, time::Duration};

use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::server::bot::session::ChatSession;

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub session: Arc<ChatSession>,
    /// Upper bound for each Discord API call made on behalf of the session.
    pub platform_timeout: Duration,
}

impl Handler {
    pub fn new(session: Arc<ChatSession>, platform_timeout: Duration) -> Self {
        Self {
            session,
            platform_timeout,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.session, self.platform_timeout, ctx, ready).await;
    }

    /// Called when a message is sent in a channel or DM
    async fn message(&self, _ctx: Context, message: Message) {
        message::handle_message(&self.session, message).await;
    }
}
