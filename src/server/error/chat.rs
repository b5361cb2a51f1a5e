use std::time::Duration;

use thiserror::Error;

/// Failure of a single call against the chat platform.
#[derive(Error, Debug)]
pub enum ChatError {
    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// The call did not complete within the configured platform timeout.
    #[error("Discord request timed out after {0:?}")]
    Timeout(Duration),
}

impl From<serenity::Error> for ChatError {
    fn from(err: serenity::Error) -> Self {
        ChatError::Discord(Box::new(err))
    }
}
