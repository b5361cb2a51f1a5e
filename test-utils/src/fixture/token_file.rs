use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::error::TestError;

/// Token allow-list written to a private temporary directory.
///
/// The directory and file are deleted when the fixture is dropped, so keep the
/// fixture alive for as long as the path is in use.
///
/// # Example
///
/// ```rust,ignore
/// let file = TokenFile::with_contents("\n; Comment\ntoken1\n")?;
/// let store = TokenStore::load(file.path())?;
/// ```
pub struct TokenFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TokenFile {
    /// Creates `tokens.txt` with the given contents.
    ///
    /// # Arguments
    /// - `contents` - Raw file contents, written verbatim
    ///
    /// # Returns
    /// - `Ok(TokenFile)` - File written and ready to read
    /// - `Err(TestError::Io)` - Temporary directory or file could not be created
    pub fn with_contents(contents: &str) -> Result<Self, TestError> {
        let dir = tempfile::Builder::new().prefix("lfp_notify_test").tempdir()?;
        let path = dir.path().join("tokens.txt");

        let mut file = std::fs::File::create(&path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;

        Ok(Self { _dir: dir, path })
    }

    /// Path inside the temporary directory where no file exists.
    pub fn missing() -> Result<Self, TestError> {
        let dir = tempfile::Builder::new().prefix("lfp_notify_test").tempdir()?;
        let path = dir.path().join("missing.txt");

        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
