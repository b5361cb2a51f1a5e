use thiserror::Error;

use crate::server::error::chat::ChatError;

/// Startup resolution failures. Every variant is terminal for the chat session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadinessError {
    #[error("Channel with id {0} does not exist!")]
    ChannelNotFound(u64),

    #[error("Channel {0} must be a text channel!")]
    NotTextChannel(u64),

    #[error("Role with id {0} does not exist!")]
    RoleNotFound(u64),

    /// Discord could not be queried while resolving the channel or role.
    ///
    /// Holds the rendered platform error so the failure can be kept in the
    /// terminated session state and reported again at exit.
    #[error("Failed to resolve channel or role: {0}")]
    Lookup(String),
}

impl From<ChatError> for ReadinessError {
    fn from(err: ChatError) -> Self {
        ReadinessError::Lookup(err.to_string())
    }
}
