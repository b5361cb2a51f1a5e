use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Temporary file or directory could not be created or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
