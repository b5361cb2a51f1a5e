//! Ready event handler for session initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The first
//! ready event resolves the announcement channel and ping role; a failure there
//! terminates the session and with it the process.

use std::{sync::Arc, time::Duration};

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::server::bot::{platform::DiscordPlatform, session::ChatSession};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `session` - Chat session to resolve
/// - `platform_timeout` - Upper bound for each Discord API call
/// - `ctx` - Discord context providing the shared HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    session: &ChatSession,
    platform_timeout: Duration,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let platform = Arc::new(DiscordPlatform::new(ctx.http.clone(), platform_timeout));

    // Errors are logged by the session, which also signals termination.
    let _ = session.on_ready(ready.user.id, platform).await;
}
