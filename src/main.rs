mod model;
mod server;

use std::{process::ExitCode, sync::Arc};

use dioxus_logger::tracing;

use crate::server::{
    bot::{
        self,
        session::{ChatSession, SessionSettings},
    },
    config::Config,
    data::token::TokenStore,
    error::AppError,
    service::notification::{NotificationService, NotifySettings},
    startup::{self, HttpServer},
    state::AppState,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_logger();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let tokens = TokenStore::load(&config.tokens_path)?;
    tracing::info!("Loaded {} tokens", tokens.len());
    for token in tokens.iter() {
        tracing::debug!("Token: {}", token);
    }

    let session = Arc::new(ChatSession::new(SessionSettings::from(&config)));
    let notifier = NotificationService::new(
        session.clone(),
        Arc::new(tokens),
        NotifySettings::from(&config),
    );

    let client = bot::start::init_bot(&config, session.clone()).await?;
    let shard_manager = client.shard_manager.clone();

    let http = HttpServer::start(&config, AppState::new(Arc::new(notifier))).await?;

    tracing::info!("Starting server");

    let mut bot_task = tokio::spawn(bot::start::start_bot(client));

    let outcome = tokio::select! {
        result = &mut bot_task => match result {
            Ok(Ok(())) => Err(AppError::InternalError(
                "Discord client stopped unexpectedly".to_string(),
            )),
            Ok(Err(e)) => Err(e),
            Err(e) => Err(AppError::InternalError(format!("Discord bot task failed: {}", e))),
        },
        e = session.wait_terminated() => Err(AppError::from(e)),
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => {
                tracing::info!("Received Ctrl-C, shutting down");
                Ok(())
            }
            Err(e) => Err(AppError::IoErr(e)),
        },
    };

    shard_manager.shutdown_all().await;
    if !bot_task.is_finished() {
        bot_task.abort();
    }

    if let Err(e) = http.stop().await {
        tracing::error!("Error stopping HTTP listener: {}", e);
    }

    outcome
}
