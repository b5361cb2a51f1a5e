use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::{handler::Handler, session::ChatSession},
    config::Config,
    error::AppError,
};

/// Gateway intents the session needs.
///
/// `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
/// enabled in the Discord Developer Portal.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT
}

/// Builds the Discord client without connecting.
///
/// # Arguments
/// - `config` - Application configuration providing the bot token and timeout
/// - `session` - Chat session receiving gateway events
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - The client could not be built
pub async fn init_bot(config: &Config, session: Arc<ChatSession>) -> Result<Client, AppError> {
    let handler = Handler::new(session, config.platform_timeout);

    let client = Client::builder(&config.discord_bot_token, intents())
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to Discord and runs until the shard manager shuts down.
///
/// This function blocks until the bot shuts down, so it should be called from
/// within a tokio::spawn task.
///
/// # Returns
/// - `Ok(())` if the gateway shut down cleanly
/// - `Err(AppError)` if login or the connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
