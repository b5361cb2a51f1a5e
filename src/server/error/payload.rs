use thiserror::Error;

/// Reasons an inbound notification body is rejected before reaching the dispatcher.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Body must be a JSON object")]
    NotAnObject,

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Field 'token' must not be empty")]
    EmptyToken,
}
