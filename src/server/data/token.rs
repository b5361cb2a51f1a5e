//! Allow-list of game-server tokens.
//!
//! Tokens are read once at startup from a line-oriented file and never change
//! afterwards. The file format is one token per line; `;` starts a comment that
//! runs to the end of the line, so a line beginning with `;` is skipped entirely
//! and `token ; note` yields `token`. Surrounding whitespace is trimmed and
//! blank lines are ignored.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use subtle::ConstantTimeEq;

use crate::server::error::token::TokenStoreError;

const COMMENT_MARKER: char = ';';

/// Immutable, insertion-ordered set of allowed tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    tokens: Vec<String>,
}

impl TokenStore {
    /// Reads and parses the allow-list file.
    ///
    /// # Arguments
    /// - `path` - Location of the token file
    ///
    /// # Returns
    /// - `Ok(TokenStore)` - At least one token was loaded
    /// - `Err(TokenStoreError::Read)` - The file could not be read
    /// - `Err(TokenStoreError::Empty)` - The file holds no token
    pub fn load(path: &Path) -> Result<Self, TokenStoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TokenStoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::parse(&contents);
        if store.is_empty() {
            return Err(TokenStoreError::Empty {
                path: PathBuf::from(path),
            });
        }

        Ok(store)
    }

    /// Parses allow-list contents, keeping the first occurrence of each token.
    pub fn parse(contents: &str) -> Self {
        let mut seen = HashSet::new();
        let tokens = contents
            .lines()
            .filter_map(|line| {
                let token = line
                    .split(COMMENT_MARKER)
                    .next()
                    .unwrap_or_default()
                    .trim();
                (!token.is_empty()).then(|| token.to_string())
            })
            .filter(|token| seen.insert(token.clone()))
            .collect();

        Self { tokens }
    }

    /// Checks whether `candidate` is an allowed token.
    ///
    /// Every stored token is compared, each in constant time.
    pub fn contains(&self, candidate: &str) -> bool {
        self.tokens
            .iter()
            .fold(false, |found, token| {
                found | bool::from(token.as_bytes().ct_eq(candidate.as_bytes()))
            })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TokenStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let tokens = iter
            .into_iter()
            .map(Into::into)
            .filter(|token: &String| seen.insert(token.clone()))
            .collect();

        Self { tokens }
    }
}
