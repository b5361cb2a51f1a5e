use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenStoreError {
    /// The allow-list file could not be opened or read.
    #[error("Failed to read token file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file holds no usable token, so no game server could ever be authorized.
    #[error("You must insert tokens in {}!", path.display())]
    Empty { path: PathBuf },
}
