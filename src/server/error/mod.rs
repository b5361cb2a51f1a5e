//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy. `AppError` is the
//! top-level error returned from startup and bootstrap code and decides the
//! process exit code. The narrower enums cover a single concern each: the chat
//! platform, the notification path, readiness resolution, the token allow-list,
//! and inbound payload parsing. `NotifyError` converts itself into the HTTP
//! response the ingress returns.

pub mod chat;
pub mod config;
pub mod notify;
pub mod payload;
pub mod readiness;
pub mod token;

use serenity::gateway::GatewayError;
use thiserror::Error;

use crate::server::error::{
    config::ConfigError, readiness::ReadinessError, token::TokenStoreError,
};

/// Exit code used when Discord rejects the bot credential.
pub const EXIT_LOGIN_FAILURE: u8 = 2;
/// Exit code used for every other fatal error.
pub const EXIT_FAILURE: u8 = 1;

/// Top-level application error type.
///
/// Aggregates every error that can stop the process. Most variants use `#[from]`
/// for automatic conversion so bootstrap code can propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The token allow-list could not be read or was empty.
    #[error(transparent)]
    TokenStoreErr(#[from] TokenStoreError),

    /// The configured channel or role could not be resolved after connecting.
    #[error(transparent)]
    ReadinessErr(#[from] ReadinessError),

    /// Discord client error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error while binding the HTTP listener or loading TLS material.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Process exit code for this error.
    ///
    /// # Returns
    /// - `2` - Discord refused the bot token
    /// - `1` - Any other fatal error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::DiscordErr(err)
                if matches!(
                    err.as_ref(),
                    serenity::Error::Gateway(GatewayError::InvalidAuthentication)
                ) =>
            {
                EXIT_LOGIN_FAILURE
            }
            _ => EXIT_FAILURE,
        }
    }
}
